use axum::response::Html;

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>The Lodge</title>
</head>
<body>
    <h1>Welcome to the lodge</h1>
    <p>
        You can join us. Send a request to <code>/join</code> with your
        pseudonym in the <code>pseudonym</code> query parameter, for example:<br>
        <br>
        <code>/join?pseudonym=anonimus</code><br>
        <br>
        If the pseudonym is free you will receive a bearer token. Without it
        you cannot see who else belongs to the lodge.<br>
        To see the other members, put the token in the Authorization header
        (bearer token) and send a request to <code>/roster</code>.
    </p>
</body>
</html>
"#;

/// GET / - Landing page explaining how to join
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}
