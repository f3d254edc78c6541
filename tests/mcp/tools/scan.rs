use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{
    TscatMcpServer,
    types::{GetStatsParams, ScanIssuesParams, ScanOverviewParams},
};

use crate::{assert_pagination, extract_tool_result_json, fixture_two_locales};

fn issues_params(root: String) -> ScanIssuesParams {
    ScanIssuesParams {
        project_root_path: root,
        rule: None,
        locale: None,
        limit: None,
        offset: None,
    }
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filesChecked"], 2);
    assert_eq!(json_result["totalCount"], 6);
    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 5);

    let rules = json_result["rules"].as_array().unwrap();
    let find = |name: &str| {
        rules
            .iter()
            .find(|r| r["rule"] == name)
            .unwrap_or_else(|| panic!("rule {name} missing"))
    };

    let unfinished = find("unfinished");
    assert_eq!(unfinished["totalCount"], 2);
    assert_eq!(unfinished["severity"], "warning");

    let placeholder = find("placeholder-mismatch");
    assert_eq!(placeholder["totalCount"], 1);
    assert_eq!(placeholder["severity"], "error");
    assert_eq!(placeholder["affectedLocales"][0], "de");

    // Each out-of-sync message concerns both catalogs.
    let out_of_sync = find("out-of-sync");
    assert_eq!(out_of_sync["totalCount"], 2);
    assert_eq!(out_of_sync["affectedLocales"].as_array().unwrap().len(), 2);

    assert_eq!(find("vanished")["totalCount"], 1);
    assert!(rules.iter().all(|r| r["rule"] != "numerus-forms"));
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_all() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(issues_params(fixture.root())))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 6);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 6);
    assert_pagination(&json_result, 0, 20, false);
}

#[tokio::test]
async fn test_scan_issues_by_rule() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let mut params = issues_params(fixture.root());
    params.rule = Some("placeholder-mismatch".to_string());

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "placeholder-mismatch");
    assert_eq!(item["severity"], "error");
    assert_eq!(item["context"], "DevicePanel");
    assert_eq!(item["source"], "Camera %1 failed");
    assert_eq!(item["line"], 16);
    assert_eq!(item["locales"][0], "de");
    assert!(item["filePath"].as_str().unwrap().ends_with("main_de.ts"));
}

#[tokio::test]
async fn test_scan_issues_by_locale() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let mut params = issues_params(fixture.root());
    params.locale = Some("ko".to_string());

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Korean unfinished + vanished, and both out-of-sync messages.
    assert_eq!(json_result["totalCount"], 4);
    for item in json_result["items"].as_array().unwrap() {
        let locales = item["locales"].as_array().unwrap();
        assert!(locales.iter().any(|l| l == "ko_KR"), "{item}");
    }
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let mut params = issues_params(fixture.root());
    params.limit = Some(4);
    params.offset = Some(0);
    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 4);
    assert_pagination(&json_result, 0, 4, true);

    let mut params = issues_params(fixture.root());
    params.limit = Some(4);
    params.offset = Some(4);
    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_eq!(json_result["totalCount"], 6);
    assert_pagination(&json_result, 4, 4, false);
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let mut params = issues_params(fixture.root());
    params.rule = Some("hardcoded".to_string());

    let result = server.scan_issues(Parameters(params)).await;
    assert!(result.is_err());
}

// ============================================================================
// get_stats tests
// ============================================================================

#[tokio::test]
async fn test_get_stats() {
    let fixture = fixture_two_locales().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetStatsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_stats(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    assert_eq!(catalogs[0]["locale"], "de");
    assert_eq!(catalogs[0]["total"], 3);
    assert_eq!(catalogs[0]["finished"], 2);
    assert_eq!(catalogs[0]["unfinished"], 1);
    assert_eq!(catalogs[0]["percent"], 66);

    assert_eq!(catalogs[1]["locale"], "ko_KR");
    assert_eq!(catalogs[1]["total"], 3);
    assert_eq!(catalogs[1]["vanished"], 1);
}
