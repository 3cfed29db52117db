mod session;
mod token;

pub use session::CommandError;
pub use session::Session;
pub use token::TokenStore;
pub use token::TokenStoreError;
