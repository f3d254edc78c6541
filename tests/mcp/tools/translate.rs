use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{
    TscatMcpServer,
    types::{SetTranslationsParams, TranslateParams, TranslationEntry},
};

use crate::{extract_tool_result_json, fixture_two_locales};

fn translate_params(root: String, locale: &str, context: &str, source: &str) -> TranslateParams {
    TranslateParams {
        project_root_path: root,
        locale: locale.to_string(),
        context: context.to_string(),
        source: source.to_string(),
        comment: None,
        count: None,
    }
}

fn entry(context: &str, source: &str) -> TranslationEntry {
    TranslationEntry {
        context: context.to_string(),
        source: source.to_string(),
        comment: None,
        translation: None,
        forms: None,
    }
}

// ============================================================================
// translate tests
// ============================================================================

#[tokio::test]
async fn test_translate_with_references() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let params = translate_params(fixture.root(), "ko", "DevicePanel", "Power Off");
    let result = server.translate(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locale"], "ko_KR");
    assert_eq!(json_result["text"], "전원 끄기");
    assert_eq!(json_result["translated"], true);
    assert_eq!(json_result["status"], "finished");
    assert_eq!(
        json_result["references"],
        json!([{"file": "../qt/offroad/settings.cc", "line": 126}])
    );
}

#[tokio::test]
async fn test_translate_falls_back_to_source() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    // Unfinished with no text is not used at runtime.
    let params = translate_params(fixture.root(), "de", "DevicePanel", "Power Off");
    let result = server.translate(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Power Off");
    assert_eq!(json_result["translated"], false);
    assert!(json_result.get("status").is_none());
}

#[tokio::test]
async fn test_translate_unknown_locale() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let params = translate_params(fixture.root(), "fr", "DevicePanel", "Reboot");
    assert!(server.translate(Parameters(params)).await.is_err());
}

// ============================================================================
// set_translations tests
// ============================================================================

#[tokio::test]
async fn test_set_translations_writes_catalog() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let mut power_off = entry("DevicePanel", "Power Off");
    power_off.translation = Some("Ausschalten".to_string());

    let params = SetTranslationsParams {
        project_root_path: fixture.root(),
        locale: "de".to_string(),
        translations: vec![power_off],
    };
    let result = server.set_translations(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["updatedCount"], 1);
    assert_eq!(json_result["failedCount"], 0);

    let content = fixture.read_catalog("main_de.ts").unwrap();
    assert!(content.contains("<translation>Ausschalten</translation>"));
    assert!(!content.contains("type=\"unfinished\""));

    // The runtime lookup now sees the new text.
    let params = translate_params(fixture.root(), "de", "DevicePanel", "Power Off");
    let result = server.translate(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "Ausschalten");
}

#[tokio::test]
async fn test_set_translations_numerus() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let mut hours = entry("DriveStats", "%n hour(s) ago");
    hours.forms = Some(vec!["%n시간 전".to_string()]);

    let params = SetTranslationsParams {
        project_root_path: fixture.root(),
        locale: "ko_KR".to_string(),
        translations: vec![hours],
    };
    let result = server.set_translations(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["updatedCount"], 1);

    let mut params = translate_params(fixture.root(), "ko", "DriveStats", "%n hour(s) ago");
    params.count = Some(3);
    let result = server.translate(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "3시간 전");
}

#[tokio::test]
async fn test_set_translations_partial_failure() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();
    let before = fixture.read_catalog("main_ko.ts").unwrap();

    let mut missing = entry("DevicePanel", "Shutdown");
    missing.translation = Some("종료".to_string());
    let mut vanished = entry("DevicePanel", "Reset Calibration");
    vanished.translation = Some("초기화".to_string());

    let params = SetTranslationsParams {
        project_root_path: fixture.root(),
        locale: "ko_KR".to_string(),
        translations: vec![missing, vanished],
    };
    let result = server.set_translations(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert_eq!(json_result["updatedCount"], 0);
    assert_eq!(json_result["failedCount"], 2);
    assert!(
        json_result["results"][0]["error"]
            .as_str()
            .unwrap()
            .contains("not found")
    );
    assert!(
        json_result["results"][1]["error"]
            .as_str()
            .unwrap()
            .starts_with("message is vanished")
    );

    // Nothing applied, nothing written.
    assert_eq!(fixture.read_catalog("main_ko.ts").unwrap(), before);
}

#[tokio::test]
async fn test_set_translations_empty_list() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let params = SetTranslationsParams {
        project_root_path: fixture.root(),
        locale: "de".to_string(),
        translations: vec![],
    };
    assert!(server.set_translations(Parameters(params)).await.is_err());
}
