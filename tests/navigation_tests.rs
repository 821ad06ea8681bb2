mod common;

use serde_json::json;

use common::{context, logged_in, RecordingTransport, ScriptedPrompt};
use transflow_console::navigation::{MenuItemKind, Point, Rect};
use transflow_console::routes::Route;

#[tokio::test]
async fn test_pointer_down_outside_closes_dropdown() {
    let ctx = logged_in(RecordingTransport::new(), ScriptedPrompt::new(true));
    let mut navbar = ctx.navbar();
    navbar.set_dropdown_region(Rect::new(800.0, 0.0, 200.0, 240.0));

    navbar.toggle();
    navbar.on_pointer_down(Point { x: 850.0, y: 100.0 });
    assert!(navbar.is_open());

    navbar.on_pointer_down(Point { x: 10.0, y: 400.0 });
    assert!(!navbar.is_open());
}

#[tokio::test]
async fn test_selecting_item_navigates_and_closes() {
    let ctx = logged_in(RecordingTransport::new(), ScriptedPrompt::new(true));
    let mut navbar = ctx.navbar();
    assert_eq!(navbar.username().as_deref(), Some("alice"));

    navbar.toggle();
    let profile = navbar.profile_items()[0];
    assert_eq!(profile.kind, MenuItemKind::Navigate(Route::Profile));
    assert_eq!(navbar.select_item(&profile), Some(Route::Profile));
    assert!(!navbar.is_open());

    navbar.toggle();
    assert_eq!(navbar.select_brand(), Route::Landing);
    assert!(!navbar.is_open());
}

#[tokio::test]
async fn test_logout_success_clears_session() {
    let transport = RecordingTransport::new();
    transport.respond("POST", "/logout", 200, json!({"message": "bye"}));
    let ctx = logged_in(transport.clone(), ScriptedPrompt::new(true));

    let mut navbar = ctx.navbar();
    navbar.toggle();
    assert_eq!(navbar.logout().await, Route::Login);
    assert!(!ctx.session.is_authenticated());
    assert_eq!(transport.requests()[0].headers["authorization"], "Bearer tok123");
}

#[tokio::test]
async fn test_landing_and_guards_follow_session() {
    let ctx = context(RecordingTransport::new(), ScriptedPrompt::new(true));
    assert_eq!(ctx.landing().cta_target(), Route::Login);
    assert_eq!(Route::from_path("/warehouse").guard(&ctx.session), Route::Login);
    assert_eq!(Route::from_path("/nope").guard(&ctx.session), Route::NotFound);

    ctx.session.set_session("tok123", &json!({"username": "alice"})).unwrap();
    assert_eq!(ctx.landing().cta_target(), Route::Dashboard);
    assert_eq!(Route::from_path("/warehouse").guard(&ctx.session), Route::Warehouses);
}
