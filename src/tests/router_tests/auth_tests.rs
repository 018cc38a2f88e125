use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, post_form, send};

fn session_from(resp: &astra::Response) -> String {
    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[test]
fn login_page_loads() {
    let app = init_test_app();
    let resp = send(&app, get("/auth", None));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("action=\"/auth/login\""));
    assert!(body.contains("name=\"email\""));
}

#[test]
fn login_sets_session_and_shows_user() {
    let app = init_test_app();

    let resp = send(
        &app,
        post_form("/auth/login", "email=Pedro%40Example.com&name=Pedro+L%C3%B3pez", None),
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let cookie = session_from(&resp);
    assert!(cookie.starts_with("session="));

    let body = body_string(send(&app, get("/auth", Some(&cookie))));
    assert!(body.contains("Ya ingresaste como <strong>Pedro López</strong>"));
}

#[test]
fn login_rejects_bad_email() {
    let app = init_test_app();
    let req = post_form("/auth/login", "email=not-an-email", None);
    assert!(matches!(handle(req, &app.state), Err(ServerError::BadRequest(_))));

    let req = post_form("/auth/login", "name=Nadie", None);
    assert!(matches!(handle(req, &app.state), Err(ServerError::BadRequest(_))));
}

#[test]
fn logout_revokes_session() {
    let app = init_test_app();
    let login = send(&app, post_form("/auth/login", "email=ana%40example.com", None));
    let cookie = session_from(&login);

    let resp = send(&app, post_form("/auth/logout", "", Some(&cookie)));
    assert_eq!(resp.status(), 303);
    assert!(session_from(&resp).ends_with("session="));

    // The old token no longer grants access.
    let req = post_form(
        "/reportes/1/timeline",
        "status=Verificado&description=Revisado",
        Some(&cookie),
    );
    assert!(matches!(handle(req, &app.state), Err(ServerError::Unauthorized(_))));
}

#[test]
fn unknown_session_cookie_is_anonymous() {
    let app = init_test_app();
    let body = body_string(send(&app, get("/reportes/1", Some("session=bogus"))));
    assert!(body.contains("Iniciar Sesión para actualizar"));
}
