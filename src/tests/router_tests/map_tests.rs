use crate::db::reports::insert_report;
use crate::domain::report::parse_timestamp;
use crate::domain::{Category, Priority, Report, Status};
use crate::tests::utils::{body_json, body_string, exec_sql, get, init_test_app, send};
use serde_json::Value;

fn ids(v: &Value) -> Vec<i64> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|x| x.as_i64().or_else(|| x["id"].as_i64()).unwrap())
        .collect()
}

fn initial_patch(body: &str) -> Value {
    let start = body.find("id=\"map-initial\">").unwrap() + "id=\"map-initial\">".len();
    let end = start + body[start..].find("</script>").unwrap();
    serde_json::from_str(&body[start..end]).unwrap()
}

#[test]
fn map_page_embeds_initial_patch() {
    let app = init_test_app();
    let resp = send(&app, get("/mapa", None));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("leaflet@1.9.4"));
    assert!(body.contains("<div id=\"map\">"));

    let patch = initial_patch(&body);
    assert_eq!(
        patch["attach"]["url"],
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
    );
    assert_eq!(ids(&patch["add"]), vec![1, 2, 3, 4, 5]);
    assert!(patch["remove"].as_array().unwrap().is_empty());
    assert_eq!(patch["viewport"]["kind"], "bounds");

    let first = &patch["add"][0];
    assert_eq!(first["color"], "#ef4444");
    assert_eq!(first["href"], "/reportes/1");
    assert!(first["popup_html"].as_str().unwrap().contains("Bache en Av. Quaranta"));
}

#[test]
fn filtered_map_page_hides_other_sidebar_items() {
    let app = init_test_app();
    let body = body_string(send(&app, get("/mapa?status=Resuelto", None)));

    assert!(body.contains("<li class=\"map-list-item\" data-report-id=\"3\">"));
    assert!(body.contains("<li class=\"map-list-item\" data-report-id=\"1\" hidden>"));

    let patch = initial_patch(&body);
    assert_eq!(ids(&patch["add"]), vec![3]);
    assert_eq!(patch["viewport"]["kind"], "center");
    assert_eq!(patch["viewport"]["zoom"], 14);
}

#[test]
fn sync_adds_only_missing_markers() {
    let app = init_test_app();

    let first = body_json(send(&app, get("/mapa/sync?priority=urgente&shown=&seq=1", None)));
    assert_eq!(first["seq"], 1);
    assert_eq!(ids(&first["visible"]), vec![1, 5]);
    assert_eq!(ids(&first["patch"]["add"]), vec![1, 5]);
    assert!(first["patch"].get("attach").is_none());

    let second = body_json(send(&app, get("/mapa/sync?priority=all&shown=1,5&seq=2", None)));
    assert_eq!(second["seq"], 2);
    assert_eq!(second["count"], 5);
    assert_eq!(ids(&second["patch"]["add"]), vec![2, 3, 4]);
    assert!(second["patch"]["remove"].as_array().unwrap().is_empty());
}

#[test]
fn sync_removes_markers_that_left_the_set() {
    let app = init_test_app();
    let resp = body_json(send(
        &app,
        get("/mapa/sync?category=Alumbrado+P%C3%BAblico&shown=1,2,3,4,5&seq=7", None),
    ));

    assert_eq!(ids(&resp["visible"]), vec![3]);
    assert_eq!(ids(&resp["patch"]["remove"]), vec![1, 2, 4, 5]);
    assert!(resp["patch"]["add"].as_array().unwrap().is_empty());
}

#[test]
fn sync_with_no_matches_keeps_viewport() {
    let app = init_test_app();
    let resp = body_json(send(&app, get("/mapa/sync?q=inexistente&shown=2&seq=3", None)));

    assert_eq!(resp["count"], 0);
    assert_eq!(ids(&resp["patch"]["remove"]), vec![2]);
    assert!(resp["patch"]["viewport"].is_null());
}

#[test]
fn report_without_location_is_listed_but_not_mapped() {
    let app = init_test_app();
    let report = Report {
        id: 6,
        title: "Pérdida de agua".into(),
        description: "Caño roto en la vereda".into(),
        category: Category::from_label("Agua"),
        priority: Priority::Urgente,
        status: Status::Reportado,
        location: "Itaembé Miní, Posadas".into(),
        coordinates: None,
        author: "Vecino".into(),
        created_at: parse_timestamp("2024-01-17").unwrap(),
        image: None,
    };
    app.state
        .db
        .with_conn(|conn| insert_report(conn, &report))
        .unwrap();

    let body = body_string(send(&app, get("/mapa?priority=Urgente", None)));
    assert!(body.contains("<li class=\"map-list-item\" data-report-id=\"6\">"));
    assert!(body.contains("Sin ubicación en el mapa"));
    assert_eq!(ids(&initial_patch(&body)["add"]), vec![1, 5]);

    let resp = body_json(send(&app, get("/mapa/sync?priority=Urgente&shown=1,5&seq=1", None)));
    assert_eq!(ids(&resp["visible"]), vec![1, 5, 6]);
    assert_eq!(resp["patch"]["add"].as_array().unwrap().len(), 0);
}

#[test]
fn sync_reports_focused_marker_only_when_live() {
    let app = init_test_app();

    let resp = body_json(send(&app, get("/mapa/sync?shown=&seq=1&focus=2", None)));
    assert_eq!(resp["selected"]["id"], 2);
    assert_eq!(resp["selected"]["href"], "/reportes/2");

    let resp = body_json(send(
        &app,
        get("/mapa/sync?status=Resuelto&shown=1,2,3,4,5&seq=2&focus=2", None),
    ));
    assert!(resp["selected"].is_null());

    let resp = body_json(send(&app, get("/mapa/sync?shown=&seq=3&focus=abc", None)));
    assert!(resp["selected"].is_null());
}

#[test]
fn non_numeric_coordinate_drops_only_that_marker() {
    let app = init_test_app();
    exec_sql(&app, "update reports set lat = 'n/a' where id = 4");

    let resp = send(&app, get("/mapa", None));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<li class=\"map-list-item\" data-report-id=\"4\">"));
    assert_eq!(ids(&initial_patch(&body)["add"]), vec![1, 2, 3, 5]);

    let list = body_string(send(&app, get("/reportes", None)));
    assert!(list.contains("Mostrando <strong>5</strong> de 5 reportes"));
}

#[test]
fn report_with_unreadable_date_is_left_off_the_map() {
    let app = init_test_app();
    exec_sql(&app, "update reports set created_at = 'ayer' where id = 4");

    let body = body_string(send(&app, get("/mapa", None)));
    assert_eq!(ids(&initial_patch(&body)["add"]), vec![1, 2, 3, 5]);
    assert!(!body.contains("data-report-id=\"4\""));
}
