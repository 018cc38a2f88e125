use crate::domain::context::ViewContext;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, ctx: &ViewContext, content: Markup) -> Markup {
    desktop_layout_with_head(title, ctx, html! {}, content)
}

/// Same shell, with extra tags appended to `<head>` (map assets).
pub fn desktop_layout_with_head(title: &str, ctx: &ViewContext, head: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · PosaCalles" }
                link rel="stylesheet" href="/static/main.css";
                (head)
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="currentColor"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" {}
                          circle cx="12" cy="10" r="3" {}
                      }
                      span { "PosaCalles" }
                  }
                  nav {
                      ul {
                          li { a href="/reportes" { "Reportes" } }
                          li { a href="/mapa" { "Mapa" } }
                          @if ctx.current_user.is_some() {
                              li { a href="/dashboard" { "Mi Panel" } }
                          }
                      }
                  }

                  @match &ctx.current_user {
                      Some(user) => {
                          div class="session" {
                              span class="muted" { (user.display_name) }
                              form action="/auth/logout" method="post" class="inline" {
                                  button type="submit" class="btn btn-outline" { "Cerrar Sesión" }
                              }
                          }
                      }
                      None => {
                          a href="/auth" class="btn btn-outline" { "Iniciar Sesión" }
                      }
                  }
              }
                (content)
            }
        }
    }
}
