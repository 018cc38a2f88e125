use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, exec_sql, get, init_test_app, send};

#[test]
fn home_page_shows_totals() {
    let app = init_test_app();
    let resp = send(&app, get("/", None));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("<strong>5</strong> reportes publicados."));
    assert!(body.contains("href=\"/mapa\""));
}

#[test]
fn list_without_filters_shows_every_report_in_order() {
    let app = init_test_app();
    let body = body_string(send(&app, get("/reportes", None)));

    assert!(body.contains("Mostrando <strong>5</strong> de 5 reportes"));
    let positions: Vec<usize> = (1..=5)
        .map(|id| {
            body.find(&format!("<article class=\"card report-card\" data-report-id=\"{id}\""))
                .unwrap_or_else(|| panic!("report {id} missing"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn list_filters_combine_with_and() {
    let app = init_test_app();
    let body = body_string(send(
        &app,
        get("/reportes?priority=Urgente&status=en-progreso", None),
    ));

    assert!(body.contains("Mostrando <strong>2</strong> de 5 reportes"));
    assert!(body.contains("Bache en Av. Quaranta"));
    assert!(body.contains("Árbol Caído"));
    assert!(!body.contains("Semáforo Descompuesto"));
}

#[test]
fn list_search_and_unknown_value() {
    let app = init_test_app();

    let body = body_string(send(&app, get("/reportes?q=SEMAFORO", None)));
    assert!(body.contains("Mostrando <strong>1</strong> de 5 reportes"));

    let body = body_string(send(&app, get("/reportes?category=Inexistente", None)));
    assert!(body.contains("No hay reportes que coincidan con los filtros."));
}

#[test]
fn detail_page_lists_timeline_in_insertion_order() {
    let app = init_test_app();
    let resp = send(&app, get("/reportes/1", None));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let created = body.find("Reporte creado por el ciudadano").unwrap();
    let verified = body.find("Reporte verificado por el equipo municipal").unwrap();
    let assigned = body.find("Trabajo asignado al equipo de vialidad").unwrap();
    assert!(created < verified && verified < assigned);

    assert!(body.contains("15/1/2024"));
    assert!(body.contains("href=\"/mapa#1\""));
    // Anonymous visitors get a sign-in link instead of the form.
    assert!(body.contains("Iniciar Sesión para actualizar"));
    assert!(!body.contains("action=\"/reportes/1/timeline\""));
}

#[test]
fn unknown_or_malformed_report_is_not_found() {
    let app = init_test_app();
    assert!(matches!(
        handle(get("/reportes/999", None), &app.state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/reportes/abc", None), &app.state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/nope", None), &app.state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn static_assets_are_served() {
    let app = init_test_app();

    let resp = send(&app, get("/static/map.js", None));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/javascript; charset=utf-8"
    );
    assert!(body_string(resp).contains("applyPatch"));

    let resp = send(&app, get("/static/main.css", None));
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".map-legend"));
}

#[test]
fn home_status_links_use_the_list_filter_query() {
    let app = init_test_app();
    let body = body_string(send(&app, get("/", None)));

    assert!(body.contains("href=\"/reportes?status=En+Progreso\""));
    assert!(body.contains("href=\"/reportes?status=Resuelto\""));
}

#[test]
fn report_with_unreadable_date_is_skipped() {
    let app = init_test_app();
    exec_sql(&app, "update reports set created_at = 'ayer' where id = 4");

    let resp = send(&app, get("/reportes", None));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Mostrando <strong>4</strong> de 4 reportes"));
    assert!(!body.contains("Basura Acumulada"));

    assert!(matches!(
        handle(get("/reportes/4", None), &app.state),
        Err(ServerError::NotFound)
    ));
}
