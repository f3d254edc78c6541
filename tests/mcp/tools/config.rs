use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{
    TscatMcpServer,
    types::{GetCatalogsParams, GetConfigParams},
};

use crate::{GERMAN, McpTestFixture, extract_tool_result_json, fixture_two_locales};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert!(json_result.get("configPath").is_none());
    assert_eq!(json_result["config"]["translationsRoot"], "./translations");
    assert_eq!(json_result["config"]["includeUnfinished"], true);
    assert_eq!(json_result["config"]["ignoreContexts"], json!([]));
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationsRoot": "./i18n",
            "includeUnfinished": false,
            "ignoreContexts": ["DebugPanel"]
        }))
        .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert!(
        json_result["configPath"]
            .as_str()
            .unwrap()
            .ends_with(".tscatrc.json")
    );
    assert_eq!(json_result["config"]["translationsRoot"], "./i18n");
    assert_eq!(json_result["config"]["includeUnfinished"], false);
    assert_eq!(json_result["config"]["ignoreContexts"], json!(["DebugPanel"]));
}

// ============================================================================
// get_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_get_catalogs() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    assert_eq!(catalogs[0]["locale"], "de");
    assert!(catalogs[0]["filePath"].as_str().unwrap().ends_with("main_de.ts"));
    assert_eq!(catalogs[0]["contextCount"], 1);
    assert_eq!(catalogs[0]["messageCount"], 3);

    assert_eq!(catalogs[1]["locale"], "ko_KR");
    assert_eq!(catalogs[1]["contextCount"], 2);
    assert_eq!(catalogs[1]["messageCount"], 4);

    assert_eq!(json_result["parseErrors"], json!([]));
}

#[tokio::test]
async fn test_get_catalogs_reports_parse_errors() {
    let fixture = McpTestFixture::with_catalogs(&[
        ("main_de.ts", GERMAN),
        ("main_fr.ts", "<html></html>"),
    ])
    .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"].as_array().unwrap().len(), 1);
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["filePath"].as_str().unwrap().ends_with("main_fr.ts"));
}

#[tokio::test]
async fn test_get_catalogs_missing_directory() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::remove_dir(fixture.root_path().join("translations")).unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await;
    assert!(result.is_err());
}
