use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary Qt project with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create a project with an empty translations/ directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a project with catalogs under translations/
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(&[
    ///     ("main_de.ts", GERMAN),
    ///     ("main_ko.ts", KOREAN),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in catalogs {
            fixture.write_catalog(name, content)?;
        }
        Ok(fixture)
    }

    pub fn write_catalog(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("translations").join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog: {}", path.display()))
    }

    pub fn read_catalog(&self, name: &str) -> Result<String> {
        let path = self.project_root.join("translations").join(name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))
    }

    /// Write a .tscatrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tscatrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Catalogs
// ============================================================================

pub const GERMAN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>DevicePanel</name>
    <message>
        <location filename="../qt/offroad/settings.cc" line="120"/>
        <source>Reboot</source>
        <translation>Neustart</translation>
    </message>
    <message>
        <location line="+6"/>
        <source>Power Off</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Camera %1 failed</source>
        <translation>Kamera ist ausgefallen</translation>
    </message>
</context>
</TS>
"#;

pub const KOREAN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ko_KR">
<context>
    <name>DevicePanel</name>
    <message>
        <location filename="../qt/offroad/settings.cc" line="120"/>
        <source>Reboot</source>
        <translation>재부팅</translation>
    </message>
    <message>
        <location line="+6"/>
        <source>Power Off</source>
        <translation>전원 끄기</translation>
    </message>
    <message>
        <source>Reset Calibration</source>
        <translation type="vanished">캘리브레이션 초기화</translation>
    </message>
</context>
<context>
    <name>DriveStats</name>
    <message numerus="yes">
        <source>%n hour(s) ago</source>
        <translation type="unfinished">
            <numerusform></numerusform>
        </translation>
    </message>
</context>
</TS>
"#;

/// German has an unfinished message and a placeholder error, Korean has a
/// vanished message and an unfinished numerus message missing from German.
pub fn fixture_two_locales() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(&[("main_de.ts", GERMAN), ("main_ko.ts", KOREAN)])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
