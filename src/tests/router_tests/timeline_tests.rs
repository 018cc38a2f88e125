use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, post_form, send, signed_in_cookie};

#[test]
fn anonymous_update_is_unauthorized() {
    let app = init_test_app();
    let req = post_form(
        "/reportes/2/timeline",
        "status=Verificado&description=Revisado",
        None,
    );
    assert!(matches!(handle(req, &app.state), Err(ServerError::Unauthorized(_))));
}

#[test]
fn signed_in_user_sees_update_form() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "laura@posadas.gob.ar", "Laura");

    let body = body_string(send(&app, get("/reportes/2", Some(&cookie))));
    assert!(body.contains("action=\"/reportes/2/timeline\""));
    assert!(body.contains("<option value=\"En Progreso\">En Progreso</option>"));
    assert!(!body.contains("Iniciar Sesión para actualizar"));
}

#[test]
fn update_is_appended_after_existing_entries() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "laura@posadas.gob.ar", "Laura Fernández");

    let resp = send(
        &app,
        post_form(
            "/reportes/1/timeline",
            "status=resuelto&description=Bache+reparado+y+se%C3%B1alizado",
            Some(&cookie),
        ),
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/reportes/1#timeline");

    let body = body_string(send(&app, get("/reportes/1", Some(&cookie))));
    let assigned = body.find("Trabajo asignado al equipo de vialidad").unwrap();
    let repaired = body.find("Bache reparado y señalizado").unwrap();
    assert!(assigned < repaired);
    assert!(body.contains("por Laura Fernández"));
}

#[test]
fn invalid_updates_are_rejected() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "ana@example.com", "Ana");

    for form in [
        "status=Reportado&description=De+nuevo",
        "status=Verificado&description=+++",
        "description=Sin+estado",
    ] {
        let req = post_form("/reportes/3/timeline", form, Some(&cookie));
        assert!(
            matches!(handle(req, &app.state), Err(ServerError::BadRequest(_))),
            "{form} should be rejected"
        );
    }
}

#[test]
fn update_for_unknown_report_is_not_found() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "ana@example.com", "Ana");

    let req = post_form(
        "/reportes/999/timeline",
        "status=Verificado&description=Revisado",
        Some(&cookie),
    );
    assert!(matches!(handle(req, &app.state), Err(ServerError::NotFound)));
}

#[test]
fn oversized_form_is_rejected_without_writing() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "ana@example.com", "Ana");

    let form = format!("status=Verificado&description={}", "a".repeat(70_000));
    let req = post_form("/reportes/3/timeline", &form, Some(&cookie));
    assert!(matches!(handle(req, &app.state), Err(ServerError::BadRequest(_))));

    let body = body_string(send(&app, get("/reportes/3", Some(&cookie))));
    assert!(!body.contains("aaaaaaaaaa"));
}
