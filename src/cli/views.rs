//! Pantallas de la consola
//!
//! Cada función pinta su pantalla, lee comandos y llama al controlador.
//! Devuelve la siguiente ruta, o `None` para salir.

use colored::*;

use super::terminal::{edit_field, error, read_line, title};
use crate::controllers::{ListPhase, Modal, Pagination, TruckFormKind};
use crate::models::Permission;
use crate::navigation::{MenuItemKind, Navbar};
use crate::routes::Route;
use crate::state::AppContext;
use crate::utils::validation::parse_id;

type Next = anyhow::Result<Option<Route>>;

const SHELL_HELP: &str = "[h] inicio  [q] salir";

fn print_navbar(navbar: &Navbar) {
    let items: Vec<String> = navbar
        .menu_items()
        .iter()
        .chain(navbar.profile_items())
        .map(|item| {
            let text = format!("[{}] {}", item.shortcut(), item.label);
            if item.danger {
                text.bright_red().to_string()
            } else {
                text
            }
        })
        .collect();
    let user = navbar.username().unwrap_or_else(|| "?".to_string());
    println!();
    println!("{} {} | {}", "🚚 TransFlow".bright_blue().bold(), items.join("  "), user.bright_cyan());
    println!("{}", SHELL_HELP.dimmed());
}

/// Comandos de la barra de navegación; `None` si el comando no es suyo
async fn shell(navbar: &mut Navbar, input: &str) -> Option<Option<Route>> {
    match input {
        "q" => return Some(None),
        "h" => return Some(Some(navbar.select_brand())),
        _ => {}
    }

    let mut chars = input.chars();
    let key = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    navbar.toggle();
    let item = navbar
        .menu_items()
        .iter()
        .chain(navbar.profile_items())
        .find(|item| item.shortcut() == key)
        .copied();

    match item {
        Some(item) if item.kind == MenuItemKind::Logout => Some(Some(navbar.logout().await)),
        Some(item) => Some(navbar.select_item(&item)),
        None => {
            navbar.close();
            None
        }
    }
}

fn split_command(input: &str) -> (&str, Option<u64>) {
    match input.split_once(' ') {
        Some((cmd, arg)) => (cmd, parse_id(arg)),
        None => (input, None),
    }
}

fn print_phase(phase: ListPhase, error_message: Option<&str>, empty_text: &str) -> bool {
    match phase {
        ListPhase::Loading => {
            println!("{}", "⏳ Cargando...".dimmed());
            false
        }
        ListPhase::Error => {
            error(error_message.unwrap_or("Error"));
            false
        }
        ListPhase::Empty => {
            println!("{}", empty_text.dimmed());
            false
        }
        ListPhase::Populated => true,
    }
}

fn print_pagination(pagination: Pagination) {
    let range = match pagination.showing_range() {
        Some((first, last)) => format!("{}-{} de {}", first, last, pagination.total),
        None => format!("0 de {}", pagination.total),
    };
    println!(
        "{}",
        format!(
            "Página {}/{} · {}  [<] anterior [>] siguiente",
            pagination.page, pagination.total_pages, range
        )
        .dimmed()
    );
}

pub fn landing(ctx: &AppContext) -> Next {
    let landing = ctx.landing();
    title("TransFlow");
    println!("Gestión de flota, depósitos y personal.");
    let input = read_line("Enter para continuar, q para salir: ")?;
    if input.trim() == "q" {
        return Ok(None);
    }
    Ok(Some(landing.cta_target()))
}

pub async fn login(ctx: &AppContext) -> Next {
    let mut login = ctx.login();
    title("🔐 Login");
    loop {
        let identifier = read_line("Usuario (q para salir): ")?;
        if identifier.trim() == "q" {
            return Ok(None);
        }
        login.identifier = identifier;
        login.password = read_line("Contraseña: ")?;

        if let Some(route) = login.submit().await {
            println!("{}", "✅ Sesión iniciada".bright_green());
            return Ok(Some(route));
        }
        if let Some(message) = login.error() {
            error(message);
        }
    }
}

pub async fn dashboard(ctx: &AppContext) -> Next {
    let mut navbar = ctx.navbar();
    let mut dashboard = ctx.dashboard();
    dashboard.load().await;

    loop {
        print_navbar(&navbar);
        title("📊 Dashboard");
        let stats = dashboard.stats();
        println!("Camiones: {}", stats.trucks.to_string().bold());
        println!("Matrículas: {}", stats.truck_infos.to_string().bold());
        println!("Depósitos: {}", stats.warehouses.to_string().bold());
        println!("Personal: {}", stats.users.to_string().bold());

        let recent = dashboard.recent();
        println!();
        println!("{}", "Últimos registros".bright_cyan());
        for info in &recent.truck_infos {
            println!("  🚛 {} (camión {})", info.plate, info.truck_id);
        }
        for warehouse in &recent.warehouses {
            println!("  🏭 {}", warehouse.warehouse_name.as_deref().unwrap_or("-"));
        }
        for user in &recent.users {
            println!("  👤 {}", user.username);
        }

        println!();
        for (index, action) in dashboard.quick_actions().iter().enumerate() {
            println!("{}. {} - {}", index + 1, action.title, action.description.dimmed());
        }

        let input = read_line("> ")?;
        let input = input.trim();
        if let Some(next) = shell(&mut navbar, input).await {
            return Ok(next);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=dashboard.quick_actions().len()).contains(&n) => {
                return Ok(Some(dashboard.quick_actions()[n - 1].route));
            }
            _ => error("Opción inválida"),
        }
    }
}

pub async fn trucks(ctx: &AppContext) -> Next {
    let mut navbar = ctx.navbar();
    let mut trucks = ctx.trucks();
    trucks.mount().await;

    loop {
        print_navbar(&navbar);
        title("🚛 Camiones");
        if print_phase(trucks.phase(), trucks.error(), "Sin registros") {
            for (index, info) in trucks.truck_infos().iter().enumerate() {
                let model = format!(
                    "{} {}",
                    info.truck_brand.as_deref().unwrap_or("-"),
                    info.truck_model.as_deref().unwrap_or("")
                );
                println!("{:>3}. {:<12} {}", index + 1, info.plate.bold(), model);
            }
        }
        println!(
            "{}",
            "[a] nuevo camión [i] nueva matrícula [e n] editar [x n] borrar matrícula [dt id] borrar camión [r] recargar"
                .dimmed()
        );

        let input = read_line("> ")?;
        let input = input.trim();
        if let Some(next) = shell(&mut navbar, input).await {
            return Ok(next);
        }

        let selected = |n: Option<u64>| {
            n.and_then(|n| usize::try_from(n).ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| trucks.truck_infos().get(i).cloned())
        };

        match split_command(input) {
            ("a", _) => trucks.open_add_truck(),
            ("i", _) => trucks.open_add_truck_info().await,
            ("e", n) => match selected(n) {
                Some(info) => trucks.open_edit_truck_info(&info).await,
                None => error("Registro inexistente"),
            },
            ("x", n) => {
                match selected(n) {
                    Some(info) => {
                        trucks.delete_truck_info(&info).await;
                    }
                    None => error("Registro inexistente"),
                }
                continue;
            }
            ("dt", Some(id)) => {
                trucks.delete_truck(id).await;
                continue;
            }
            ("r", _) => {
                trucks.refresh_truck_infos().await;
                continue;
            }
            _ => {
                error("Comando inválido");
                continue;
            }
        }

        // Modal abierto: rellenar y guardar hasta éxito o cancelación
        loop {
            let options: Vec<String> = trucks.trucks().iter().map(|t| t.label()).collect();
            let Some(form) = trucks.form_mut() else {
                break;
            };
            match form.kind {
                TruckFormKind::Truck => {
                    edit_field("Marca", &mut form.truck_brand)?;
                    edit_field("Modelo", &mut form.truck_model)?;
                }
                TruckFormKind::TruckInfo => {
                    for option in &options {
                        println!("  {}", option.dimmed());
                    }
                    edit_field("ID de camión", &mut form.truck_id)?;
                    edit_field("Matrícula", &mut form.plate)?;
                }
            }
            if trucks.save().await || !ctx.prompt.confirm("¿Corregir y reintentar?") {
                trucks.cancel();
                break;
            }
        }
    }
}

fn print_options<'a>(options: impl Iterator<Item = (u64, &'a str)>) {
    for (id, name) in options {
        println!("  {:>4} {}", id, name);
    }
}

fn read_id(label: &str) -> anyhow::Result<Option<u64>> {
    Ok(parse_id(&read_line(label)?))
}

pub async fn warehouses(ctx: &AppContext) -> Next {
    let mut navbar = ctx.navbar();
    let mut warehouses = ctx.warehouses();
    warehouses.mount().await;

    loop {
        print_navbar(&navbar);
        title("🏭 Depósitos");
        let applied = warehouses.applied();
        if applied.id.is_some() || applied.name.is_some() {
            println!(
                "{}",
                format!(
                    "Filtro: id={} nombre={}",
                    applied.id.map(|id| id.to_string()).unwrap_or_default(),
                    applied.name.clone().unwrap_or_default()
                )
                .dimmed()
            );
        }
        if print_phase(warehouses.phase(), warehouses.error(), "Sin depósitos") {
            for (index, warehouse) in warehouses.rows().iter().enumerate() {
                println!(
                    "{:>3}. #{:<5} {:<24} {} {}",
                    index + 1,
                    warehouse.warehouse_id,
                    warehouse.warehouse_name.as_deref().unwrap_or("-").bold(),
                    warehouse.city_name.as_deref().unwrap_or(""),
                    warehouse.country_name.as_deref().unwrap_or("")
                );
            }
            print_pagination(warehouses.pagination());
        }
        println!("{}", "[f] buscar [c] limpiar [a] nuevo [e n] editar [x n] borrar".dimmed());

        let input = read_line("> ")?;
        let input = input.trim();
        if let Some(next) = shell(&mut navbar, input).await {
            return Ok(next);
        }

        let selected = |n: Option<u64>| {
            n.and_then(|n| usize::try_from(n).ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| warehouses.rows().get(i).cloned())
        };

        match split_command(input) {
            ("f", _) => {
                edit_field("ID", &mut warehouses.filters.id)?;
                edit_field("Nombre", &mut warehouses.filters.name)?;
                warehouses.apply_search().await;
                continue;
            }
            ("c", _) => {
                warehouses.clear_search().await;
                continue;
            }
            (">", _) => {
                warehouses.next_page().await;
                continue;
            }
            ("<", _) => {
                warehouses.prev_page().await;
                continue;
            }
            ("a", _) => warehouses.open_add(),
            ("e", n) => match selected(n) {
                Some(warehouse) => warehouses.open_edit(&warehouse),
                None => error("Depósito inexistente"),
            },
            ("x", n) => {
                match selected(n) {
                    Some(warehouse) => {
                        warehouses.delete(warehouse.warehouse_id).await;
                    }
                    None => error("Depósito inexistente"),
                }
                continue;
            }
            _ => {
                error("Comando inválido");
                continue;
            }
        }

        loop {
            if let Modal::Edit { target, .. } = warehouses.modal() {
                println!("Editando #{}", target.warehouse_id);
            }
            let Some(form) = warehouses.form_mut() else {
                break;
            };
            edit_field("Nombre", &mut form.name)?;
            edit_field("Dirección", &mut form.address)?;

            print_options(
                warehouses
                    .cascade
                    .countries()
                    .iter()
                    .map(|c| (c.country_id, c.country_name.as_str())),
            );
            warehouses.select_country(read_id("País (id): ")?).await;
            print_options(
                warehouses
                    .cascade
                    .cities()
                    .iter()
                    .map(|c| (c.city_id, c.city_name.as_str())),
            );
            let city = read_id("Ciudad (id): ")?;
            if !warehouses.select_city(city) {
                error("Ciudad inválida");
            }

            if warehouses.save().await || !ctx.prompt.confirm("¿Corregir y reintentar?") {
                warehouses.cancel();
                break;
            }
        }
    }
}

pub async fn users(ctx: &AppContext) -> Next {
    let mut navbar = ctx.navbar();
    let mut users = ctx.users();
    users.mount().await;

    loop {
        print_navbar(&navbar);
        title("👥 Personal");
        if print_phase(users.phase(), users.error(), "Sin usuarios") {
            for (index, user) in users.rows().iter().enumerate() {
                println!(
                    "{:>3}. #{:<5} {:<20} {}",
                    index + 1,
                    user.user_id,
                    user.username.bold(),
                    user.job.as_deref().unwrap_or("")
                );
            }
            print_pagination(users.pagination());
        }
        println!("{}", "[a] nuevo [v n] detalle [x n] borrar".dimmed());

        let input = read_line("> ")?;
        let input = input.trim();
        if let Some(next) = shell(&mut navbar, input).await {
            return Ok(next);
        }

        let selected = |n: Option<u64>| {
            n.and_then(|n| usize::try_from(n).ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| users.rows().get(i).cloned())
        };

        match split_command(input) {
            (">", _) => users.next_page().await,
            ("<", _) => users.prev_page().await,
            ("v", n) => match selected(n) {
                Some(user) => {
                    users.open_view(&user);
                    if let Modal::View(user) = users.modal() {
                        println!("Usuario: {}", user.username.bold());
                        println!("Email: {}", user.email.as_deref().unwrap_or("-"));
                        println!("Teléfono: {}", user.tel.as_deref().unwrap_or("-"));
                        println!("Dirección: {}", user.address.as_deref().unwrap_or("-"));
                        println!("Puesto: {}", user.job.as_deref().unwrap_or("-"));
                    }
                    read_line("Enter para cerrar")?;
                    users.cancel();
                }
                None => error("Usuario inexistente"),
            },
            ("x", n) => match selected(n) {
                Some(user) => {
                    users.delete(user.user_id).await;
                }
                None => error("Usuario inexistente"),
            },
            ("a", _) => {
                users.open_add();
                loop {
                    print_options(
                        users
                            .cascade
                            .countries()
                            .iter()
                            .map(|c| (c.country_id, c.country_name.as_str())),
                    );
                    users.select_country(read_id("País (id): ")?).await;
                    print_options(
                        users
                            .cascade
                            .cities()
                            .iter()
                            .map(|c| (c.city_id, c.city_name.as_str())),
                    );
                    let city = read_id("Ciudad (id): ")?;
                    if !users.select_city(city) {
                        error("Ciudad inválida");
                    }

                    let Some(form) = users.form_mut() else {
                        break;
                    };
                    edit_field("Usuario", &mut form.username)?;
                    edit_field("Contraseña", &mut form.password)?;
                    let admin = read_line("¿Administrador? (s/N): ")?;
                    form.permission = if admin.trim() == "s" {
                        Permission::Admin
                    } else {
                        Permission::Standard
                    };
                    edit_field("Email", &mut form.email)?;
                    edit_field("Teléfono", &mut form.tel)?;
                    edit_field("Dirección", &mut form.address)?;
                    edit_field("Puesto", &mut form.job)?;
                    edit_field("ID de depósito", &mut form.warehouse_id)?;

                    if users.save().await || !ctx.prompt.confirm("¿Corregir y reintentar?") {
                        users.cancel();
                        break;
                    }
                }
            }
            _ => error("Comando inválido"),
        }
    }
}

pub fn not_available(route: Route) -> Option<Route> {
    error(&format!("{} no está disponible en la consola", route.path()));
    Some(Route::Dashboard)
}
