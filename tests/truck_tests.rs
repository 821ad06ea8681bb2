mod common;

use serde_json::json;

use common::{logged_in, RecordingTransport, ScriptedPrompt};
use transflow_console::controllers::truck_controller::{
    ADD_TRUCK_SUCCESS, BRAND_REQUIRED, DELETE_CONFIRM, EDIT_TRUCK_INFO_SUCCESS, PLATE_REQUIRED,
    TRUCK_ID_REQUIRED,
};
use transflow_console::controllers::{ListPhase, Modal, TruckFormKind};
use transflow_console::models::TruckInfo;

fn truck_infos() -> serde_json::Value {
    json!([
        {"truckInfoID": 7, "truckID": 3, "plate": "34XYZ99", "truckBrand": "Volvo", "truckModel": "FH16"},
        {"truckID": 4, "plate": "06AB1234"}
    ])
}

#[tokio::test]
async fn test_mount_loads_both_lists() {
    let transport = RecordingTransport::new();
    transport.respond("GET", "/listTrucks", 200, json!([{"truckID": 3, "truckBrand": "Volvo", "truckModel": "FH16"}]));
    transport.respond("GET", "/listTruckInfo", 200, truck_infos());
    let ctx = logged_in(transport.clone(), ScriptedPrompt::new(true));

    let mut trucks = ctx.trucks();
    trucks.mount().await;

    assert_eq!(trucks.phase(), ListPhase::Populated);
    assert_eq!(trucks.trucks()[0].label(), "ID: 3 - Volvo FH16");
    assert_eq!(trucks.truck_infos().len(), 2);
    assert_eq!(transport.count("GET /listTrucks"), 1);
    assert_eq!(transport.count("GET /listTruckInfo"), 1);
}

#[tokio::test]
async fn test_truck_selector_failure_is_empty() {
    let transport = RecordingTransport::new();
    transport.respond("GET", "/listTrucks", 500, json!({"message": "boom"}));
    transport.respond("GET", "/listTruckInfo", 200, truck_infos());
    let ctx = logged_in(transport.clone(), ScriptedPrompt::new(true));

    let mut trucks = ctx.trucks();
    trucks.mount().await;

    assert!(trucks.trucks().is_empty());
    assert_eq!(trucks.phase(), ListPhase::Populated);
    assert_eq!(trucks.error(), None);
}

#[tokio::test]
async fn test_truck_info_sentinel_is_empty() {
    let transport = RecordingTransport::new();
    transport.respond("GET", "/listTrucks", 200, json!([]));
    transport.respond(
        "GET",
        "/listTruckInfo",
        404,
        json!({"message": "Hicbir tır kaydi bulunamadi."}),
    );
    let ctx = logged_in(transport.clone(), ScriptedPrompt::new(true));

    let mut trucks = ctx.trucks();
    trucks.mount().await;
    assert_eq!(trucks.phase(), ListPhase::Empty);
}

#[tokio::test]
async fn test_edit_plate_only_sends_partial_body() {
    let transport = RecordingTransport::new();
    transport.respond("GET", "/listTrucks", 200, json!([{"truckID": 3, "truckBrand": "Volvo", "truckModel": "FH16"}]));
    transport.respond("GET", "/listTruckInfo", 200, truck_infos());
    transport.respond("PUT", "/editTruckInfo?id=7", 200, json!({"message": "updated"}));
    let prompt = ScriptedPrompt::new(true);
    let ctx = logged_in(transport.clone(), prompt.clone());

    let mut trucks = ctx.trucks();
    trucks.mount().await;
    let target: TruckInfo = trucks.truck_infos()[0].clone();
    trucks.open_edit_truck_info(&target).await;
    {
        let form = trucks.form_mut().unwrap();
        assert_eq!(form.kind, TruckFormKind::TruckInfo);
        assert_eq!(form.plate, "34XYZ99");
        form.truck_id.clear();
        form.plate = " 34ABC123 ".to_string();
    }
    transport.clear_log();

    assert!(trucks.save().await);
    assert_eq!(transport.calls(), vec!["PUT /editTruckInfo?id=7", "GET /listTruckInfo"]);
    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"plate": "34ABC123"}));
    assert_eq!(prompt.alerts(), vec![EDIT_TRUCK_INFO_SUCCESS.to_string()]);
    assert!(matches!(trucks.modal(), Modal::Closed));
}

#[tokio::test]
async fn test_opening_truck_info_form_loads_selector() {
    let transport = RecordingTransport::new();
    transport.respond("GET", "/listTrucks", 200, json!([{"truckID": 3, "truckBrand": "Volvo", "truckModel": "FH16"}]));
    let ctx = logged_in(transport.clone(), ScriptedPrompt::new(true));

    let mut trucks = ctx.trucks();
    trucks.open_add_truck_info().await;
    assert_eq!(trucks.trucks().len(), 1);

    trucks.cancel();
    trucks.open_add_truck_info().await;
    assert_eq!(transport.count("GET /listTrucks"), 1);
}

#[tokio::test]
async fn test_validation_order() {
    let transport = RecordingTransport::new();
    let prompt = ScriptedPrompt::new(true);
    let ctx = logged_in(transport.clone(), prompt.clone());

    let mut trucks = ctx.trucks();
    trucks.open_add_truck();
    trucks.form_mut().unwrap().truck_model = "FH16".to_string();
    assert!(!trucks.save().await);

    trucks.open_add_truck_info().await;
    trucks.form_mut().unwrap().plate = "34ABC123".to_string();
    assert!(!trucks.save().await);

    let form = trucks.form_mut().unwrap();
    form.truck_id = "3".to_string();
    form.plate = "   ".to_string();
    assert!(!trucks.save().await);

    assert_eq!(
        prompt.alerts(),
        vec![
            BRAND_REQUIRED.to_string(),
            TRUCK_ID_REQUIRED.to_string(),
            PLATE_REQUIRED.to_string(),
        ]
    );
    assert!(trucks.modal().is_open());
    assert_eq!(transport.calls(), vec!["GET /listTrucks"]);
}

#[tokio::test]
async fn test_delete_truck_info_without_id_is_a_no_op() {
    let transport = RecordingTransport::new();
    let prompt = ScriptedPrompt::new(true);
    let ctx = logged_in(transport.clone(), prompt.clone());

    let mut trucks = ctx.trucks();
    let orphan: TruckInfo = serde_json::from_value(json!({"truckID": 4, "plate": "06AB1234"})).unwrap();
    assert!(!trucks.delete_truck_info(&orphan).await);
    assert!(prompt.confirms().is_empty());
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_delete_truck_refreshes_both_lists() {
    let transport = RecordingTransport::new();
    transport.respond("DELETE", "/removeTruck?id=3", 200, json!({"message": "removed"}));
    transport.respond("GET", "/listTrucks", 200, json!([]));
    transport.respond("GET", "/listTruckInfo", 200, json!([]));
    let ctx = logged_in(transport.clone(), ScriptedPrompt::new(true));

    let mut trucks = ctx.trucks();
    assert!(trucks.delete_truck(3).await);
    assert_eq!(
        transport.calls(),
        vec!["DELETE /removeTruck?id=3", "GET /listTrucks", "GET /listTruckInfo"]
    );
}

#[tokio::test]
async fn test_delete_truck_info_refreshes_records_only() {
    let transport = RecordingTransport::new();
    transport.respond("GET", "/listTruckInfo", 200, truck_infos());
    transport.respond("DELETE", "/removeTruckInfo?id=7", 200, json!({"message": "removed"}));
    let prompt = ScriptedPrompt::new(true);
    let ctx = logged_in(transport.clone(), prompt.clone());

    let mut trucks = ctx.trucks();
    trucks.refresh_truck_infos().await;
    let record = trucks.truck_infos()[0].clone();
    transport.clear_log();

    assert!(trucks.delete_truck_info(&record).await);
    assert_eq!(
        transport.calls(),
        vec!["DELETE /removeTruckInfo?id=7", "GET /listTruckInfo"]
    );
    assert_eq!(prompt.confirms(), vec![DELETE_CONFIRM.to_string()]);
}

#[tokio::test]
async fn test_add_truck_refreshes_selector_only() {
    let transport = RecordingTransport::new();
    transport.respond("POST", "/addTruck", 201, json!({"message": "created", "id": 5}));
    transport.respond("GET", "/listTrucks", 200, json!([{"truckID": 5, "truckBrand": "MAN", "truckModel": "TGX"}]));
    let prompt = ScriptedPrompt::new(true);
    let ctx = logged_in(transport.clone(), prompt.clone());

    let mut trucks = ctx.trucks();
    trucks.open_add_truck();
    {
        let form = trucks.form_mut().unwrap();
        form.truck_brand = " MAN ".to_string();
        form.truck_model = "TGX".to_string();
    }

    assert!(trucks.save().await);
    assert_eq!(transport.calls(), vec!["POST /addTruck", "GET /listTrucks"]);
    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"truckBrand": "MAN", "truckModel": "TGX"}));
    assert_eq!(prompt.alerts(), vec![ADD_TRUCK_SUCCESS.to_string()]);
    assert_eq!(trucks.trucks().len(), 1);
    assert!(matches!(trucks.modal(), Modal::Closed));
}

#[tokio::test]
async fn test_failed_delete_does_not_refetch() {
    let transport = RecordingTransport::new();
    transport.respond("DELETE", "/removeTruck?id=3", 500, json!({"error": "truck in use"}));
    transport.respond("DELETE", "/removeTruckInfo?id=7", 500, json!({"message": "locked"}));
    let prompt = ScriptedPrompt::new(true);
    let ctx = logged_in(transport.clone(), prompt.clone());

    let mut trucks = ctx.trucks();
    let record: TruckInfo = serde_json::from_value(json!({"truckInfoID": 7, "truckID": 3, "plate": "34XYZ99"})).unwrap();

    assert!(!trucks.delete_truck(3).await);
    assert!(!trucks.delete_truck_info(&record).await);
    assert_eq!(
        transport.calls(),
        vec!["DELETE /removeTruck?id=3", "DELETE /removeTruckInfo?id=7"]
    );
    assert_eq!(
        prompt.alerts(),
        vec!["truck in use".to_string(), "locked".to_string()]
    );
}
