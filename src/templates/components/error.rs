use maud::{html, Markup, DOCTYPE};

/// Standalone error page; does not need a view context.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                main class="container narrow" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Volver al inicio" } }
                }
            }
        }
    }
}
