//! Consola interactiva de terminal
//!
//! Un bucle por ruta: cada pantalla devuelve la siguiente ruta o `None`
//! para salir. Toda la lógica vive en los controladores.

pub mod terminal;
pub mod views;

use colored::*;
use tracing::info;

use crate::routes::Route;
use crate::state::AppContext;

pub use terminal::TerminalPrompt;

pub async fn run(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", "🚚 TransFlow - Consola de administración".bright_blue().bold());
    println!("{}", "========================================".bright_blue());
    info!("🌐 Backend: {}", ctx.client.base_url());

    let mut route = Route::Landing;
    loop {
        let guarded = route.guard(&ctx.session);
        let next = match guarded {
            Route::Landing => views::landing(ctx)?,
            Route::Login => views::login(ctx).await?,
            Route::Dashboard => views::dashboard(ctx).await?,
            Route::Trucks => views::trucks(ctx).await?,
            Route::Warehouses => views::warehouses(ctx).await?,
            Route::UserManagement => views::users(ctx).await?,
            Route::Profile | Route::Employees | Route::NotFound => views::not_available(guarded),
        };

        match next {
            Some(next) => route = next,
            None => break,
        }
    }

    println!("{}", "👋 ¡Hasta luego!".bright_green());
    Ok(())
}
