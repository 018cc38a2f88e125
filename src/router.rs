use crate::auth::identity::sign_in;
use crate::auth::sessions::{
    clear_session_cookie, load_user_from_session, revoke_session, session_cookie,
    session_token_from_cookie,
};
use crate::config::AppConfig;
use crate::db::reports::{count_by_status, get_report, load_store};
use crate::db::timeline::{append_timeline_entry, list_timeline, recent_entries_by_author};
use crate::db::users::get_user_profile;
use crate::db::Database;
use crate::domain::filter::{self, FilterState};
use crate::domain::report::ReportId;
use crate::domain::store::status_counts;
use crate::domain::timeline::NewTimelineEntry;
use crate::domain::ViewContext;
use crate::errors::{ResultResp, ServerError};
use crate::map::{MapPatch, MapRenderer, PatchSurface, ReportSelected};
use crate::responses::{asset_response, html_response, json_response, redirect};
use crate::templates;
use astra::Request;
use chrono::Utc;
use http::Method;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info};

const MAX_FORM_BYTES: u64 = 64 * 1024;
const DASHBOARD_ACTIVITY: usize = 10;

const MAP_JS: &str = include_str!("../static/map.js");
const MAIN_CSS: &str = include_str!("../static/main.css");

/// Everything a request handler needs. Shared read-only by all workers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
}

/// Body of `GET /mapa/sync`.
#[derive(Debug, Serialize)]
struct SyncResponse {
    seq: u64,
    patch: MapPatch,
    visible: Vec<ReportId>,
    count: usize,
    /// The `focus` report, when it has a live marker after this sync.
    selected: Option<ReportSelected>,
}

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);
    let ctx = view_context(&req, &app.db)?;

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (&method, segments.as_slice()) {
        (&Method::GET, []) => {
            let (total, by_status) = app.db.with_conn(|conn| {
                let store = load_store(conn)?;
                Ok((store.len(), count_by_status(conn)?))
            })?;
            html_response(templates::pages::home_page(&ctx, total, &by_status))
        }

        (&Method::GET, ["reportes"]) => {
            let store = app.db.with_conn(|conn| load_store(conn))?;
            let filter = FilterState::from_params(&query);
            let visible = filter::apply(store.get_all(), &filter);
            html_response(templates::pages::reports_page(
                &ctx,
                &filter,
                &visible,
                store.len(),
            ))
        }

        (&Method::GET, ["reportes", id]) => {
            let id = parse_report_id(id)?;
            let (report, timeline) = app.db.with_conn(|conn| {
                let report = get_report(conn, id)?.ok_or(ServerError::NotFound)?;
                let timeline = list_timeline(conn, id)?;
                Ok((report, timeline))
            })?;
            html_response(templates::pages::report_detail_page(&ctx, &report, &timeline))
        }

        (&Method::POST, ["reportes", id, "timeline"]) => {
            let id = parse_report_id(id)?;
            let user = ctx.current_user.clone().ok_or_else(|| {
                ServerError::Unauthorized("Iniciá sesión para agregar actualizaciones".into())
            })?;
            let form = read_form(&mut req)?;

            let entry = app.db.with_conn(|conn| {
                if get_report(conn, id)?.is_none() {
                    return Err(ServerError::NotFound);
                }
                let new_entry = NewTimelineEntry::from_form(
                    form.get("status").map(String::as_str),
                    form.get("description").map(String::as_str),
                )
                .map_err(ServerError::BadRequest)?;
                append_timeline_entry(conn, id, &new_entry, &user.display_name, Utc::now())
            })?;

            info!(
                report_id = id,
                entry_id = entry.id,
                status = %entry.status,
                user_id = user.id,
                "timeline entry added"
            );
            redirect(&format!("/reportes/{id}#timeline"), None)
        }

        (&Method::GET, ["mapa"]) => {
            let store = app.db.with_conn(|conn| load_store(conn))?;
            let filter = FilterState::from_params(&query);
            let visible = filter::apply(store.get_all(), &filter);

            let mut renderer = MapRenderer::new(PatchSurface::new(), app.config.map.clone());
            renderer.attach();
            renderer.render(visible.iter().copied());
            let patch = renderer.into_surface().take_patch();

            let patch_json = serde_json::to_string(&patch).map_err(|e| {
                tracing::error!(error = %e, "could not encode initial map patch");
                ServerError::InternalError
            })?;

            html_response(templates::pages::map_page(
                &ctx,
                &filter,
                store.get_all(),
                &visible,
                &patch_json,
            ))
        }

        (&Method::GET, ["mapa", "sync"]) => {
            let store = app.db.with_conn(|conn| load_store(conn))?;
            let filter = FilterState::from_params(&query);
            let visible = filter::apply(store.get_all(), &filter);

            let shown = parse_shown(query.get("shown").map(String::as_str).unwrap_or(""));
            let seq = query
                .get("seq")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(0);
            let focus = query
                .get("focus")
                .and_then(|s| s.trim().parse::<ReportId>().ok());

            let mut renderer =
                MapRenderer::resume(PatchSurface::new(), app.config.map.clone(), shown);
            let outcome = renderer.render(visible.iter().copied());
            let selected = focus.and_then(|id| renderer.select(id));
            debug!(seq, ?outcome, ?focus, "map sync");

            json_response(&SyncResponse {
                seq,
                patch: renderer.into_surface().take_patch(),
                visible: visible.iter().map(|r| r.id).collect(),
                count: visible.len(),
                selected,
            })
        }

        (&Method::GET, ["dashboard"]) => {
            let Some(user) = ctx.current_user.clone() else {
                return redirect("/auth", None);
            };

            let loaded = app.db.with_conn(|conn| {
                let Some(profile) = get_user_profile(conn, user.id)? else {
                    return Ok(None);
                };
                let store = load_store(conn)?;
                let activity =
                    recent_entries_by_author(conn, &user.display_name, DASHBOARD_ACTIVITY)?;
                Ok(Some((profile, store, activity)))
            })?;
            let Some((profile, store, activity)) = loaded else {
                return redirect("/auth", Some(clear_session_cookie()));
            };

            let mine = store.by_author(&user.display_name);
            let counts = status_counts(mine.iter().copied());
            html_response(templates::pages::dashboard_page(
                &ctx, &profile, &mine, &counts, &activity,
            ))
        }

        (&Method::GET, ["auth"]) => html_response(templates::pages::login_page(&ctx)),

        (&Method::POST, ["auth", "login"]) => {
            let form = read_form(&mut req)?;
            let email = form
                .get("email")
                .ok_or_else(|| ServerError::BadRequest("Falta el email".into()))?;
            let name = form.get("name").map(String::as_str);

            let signed_in =
                app.db.with_conn(|conn| sign_in(conn, email, name, Utc::now().timestamp()))?;
            info!(user_id = signed_in.user.id, "user signed in");

            redirect("/", Some(session_cookie(&signed_in.session_token)))
        }

        (&Method::POST, ["auth", "logout"]) => {
            if let Some(token) = session_token(&req) {
                app.db
                    .with_conn(|conn| revoke_session(conn, &token, Utc::now().timestamp()))?;
            }
            if let Some(user_id) = ctx.current_user_id() {
                info!(user_id, "user signed out");
            }
            redirect("/", Some(clear_session_cookie()))
        }

        (&Method::GET, ["static", "map.js"]) => {
            asset_response(MAP_JS, mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref())
        }
        (&Method::GET, ["static", "main.css"]) => {
            asset_response(MAIN_CSS, mime::TEXT_CSS_UTF_8.as_ref())
        }

        _ => Err(ServerError::NotFound),
    }
}

fn view_context(req: &Request, db: &Database) -> Result<ViewContext, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(ViewContext::anonymous());
    };
    let user = db.with_conn(|conn| load_user_from_session(conn, &token, Utc::now().timestamp()))?;
    Ok(user.map(ViewContext::signed_in).unwrap_or_else(ViewContext::anonymous))
}

fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(session_token_from_cookie)
        .map(str::to_string)
}

fn parse_report_id(raw: &str) -> Result<ReportId, ServerError> {
    raw.parse::<ReportId>().map_err(|_| ServerError::NotFound)
}

/// Comma separated ids; anything unparsable is ignored.
fn parse_shown(raw: &str) -> Vec<ReportId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<ReportId>() {
            Ok(id) => Some(id),
            Err(_) => {
                debug!(value = s, "ignoring unparsable shown id");
                None
            }
        })
        .collect()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

/// Reads a urlencoded body of at most `MAX_FORM_BYTES`.
fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("No se pudo leer el formulario: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("El formulario es demasiado grande".into()));
    }

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
