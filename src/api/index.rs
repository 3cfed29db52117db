use axum::response::Html;

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Spotify Editor Bridge</title>
    <style>
      body { font-family: sans-serif; margin: 4em auto; max-width: 30em; text-align: center; }
      a.button { display: inline-block; padding: 0.8em 2em; border-radius: 2em;
                 background: #1db954; color: #fff; text-decoration: none; }
      #status { margin-top: 2em; }
    </style>
  </head>
  <body>
    <h1>Spotify Editor Bridge</h1>
    <p>Connect your Spotify account to control playback from your editor.</p>
    <a class="button" href="/login">Log in with Spotify</a>
    <p id="status"></p>
    <script>
      const params = new URLSearchParams(window.location.hash.slice(1));
      const status = document.getElementById('status');
      if (params.has('success')) {
        status.textContent = 'Authorization successful. You can close this window.';
      } else if (params.has('error')) {
        status.textContent = 'Authorization failed (' + params.get('error') + '). Please try again.';
      }
    </script>
  </body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}
