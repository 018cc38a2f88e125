use crate::domain::context::ViewContext;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(ctx: &ViewContext) -> Markup {
    desktop_layout(
        "Iniciar Sesión",
        ctx,
        html! {
            main class="container narrow" {
                h1 { "Iniciar Sesión" }
                @if let Some(user) = &ctx.current_user {
                    p { "Ya ingresaste como " strong { (user.display_name) } "." }
                } @else {
                    p class="lead" {
                        "Ingresá tu email para poder publicar actualizaciones en los reportes."
                    }
                    form method="post" action="/auth/login" class="stack" {
                        label for="email" { "Email" }
                        input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="vos@dominio.com"
                            autocomplete="email"
                            required;
                        label for="name" { "Nombre (opcional)" }
                        input type="text" id="name" name="name" autocomplete="name";
                        button type="submit" class="btn" { "Ingresar" }
                    }
                }
            }
        },
    )
}
