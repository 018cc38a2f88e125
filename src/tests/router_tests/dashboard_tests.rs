use crate::tests::utils::{body_string, get, init_test_app, send, signed_in_cookie};

#[test]
fn anonymous_dashboard_redirects_to_login() {
    let app = init_test_app();
    let resp = send(&app, get("/dashboard", None));

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/auth");
}

#[test]
fn dashboard_lists_own_reports_and_activity() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "maria@posadas.gob.ar", "María González");

    let resp = send(&app, get("/dashboard", Some(&cookie)));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("maria@posadas.gob.ar"));
    assert!(body.contains("Miembro desde"));
    assert!(body.contains("data-report-id=\"1\""));
    assert!(!body.contains("data-report-id=\"2\""));
    assert!(body.contains("Reporte creado por el ciudadano"));
    assert!(!body.contains("Trabajo asignado al equipo de vialidad"));
    assert!(body.contains("<div class=\"stat-value\">1</div><p class=\"muted small\">En Progreso</p>"));
}

#[test]
fn dashboard_without_reports_shows_empty_state() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "nuevo@example.com", "Vecino Nuevo");

    let body = body_string(send(&app, get("/dashboard", Some(&cookie))));
    assert!(body.contains("Todavía no hay reportes a tu nombre."));
    assert!(body.contains("Sin actualizaciones publicadas."));
    assert!(body.contains("href=\"/dashboard\""));
}
