mod common;

use common::{CatalogTest, StubServer, UNREACHABLE_API};

#[test]
fn test_config_set_and_get_base_url() {
    let catalog = CatalogTest::new();

    let out = catalog.run_success(&["config", "set", "api.base_url", "http://localhost:8080/"]);
    assert!(out.contains("api.base_url"));
    assert!(out.contains("to http://localhost:8080"));
    assert!(catalog.read_config().contains("base_url: http://localhost:8080"));

    let value = catalog.run_success(&["config", "get", "api.base_url"]);
    assert_eq!(value.trim(), "http://localhost:8080");
}

#[test]
fn test_config_get_defaults_without_file() {
    let catalog = CatalogTest::new();

    let value = catalog.run_success(&["config", "get", "notification.dismiss_after_ms"]);
    assert_eq!(value.trim(), "3000");

    let value = catalog.run_success(&["config", "get", "api.base_url"]);
    assert_eq!(value.trim(), "http://localhost:5000");
}

#[test]
fn test_config_rejects_bad_values() {
    let catalog = CatalogTest::new();

    let stderr = catalog.run_failure(&["config", "set", "api.base_url", "ftp://example.com"]);
    assert!(stderr.contains("unsupported scheme"));

    let stderr = catalog.run_failure(&["config", "set", "notification.dismiss_after_ms", "soon"]);
    assert!(stderr.contains("expected milliseconds"));

    let stderr = catalog.run_failure(&["config", "get", "api_base_url"]);
    assert!(stderr.contains("Use dot notation: 'api.base_url'"));
}

#[test]
fn test_config_show_json_reports_env_override() {
    let catalog = CatalogTest::new().with_api_url("http://10.1.2.3:9000");
    catalog.write_config("api:\n  base_url: http://localhost:7000\n");

    let out = catalog.run_success(&["--json", "config", "show"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(json["api"]["base_url"], "http://localhost:7000");
    assert_eq!(json["api"]["effective_base_url"], "http://10.1.2.3:9000/");
    assert_eq!(json["api"]["source"], "environment");
    assert_eq!(json["notification"]["dismiss_after_ms"], 3000);
}

#[test]
fn test_ls_reports_load_failure() {
    let catalog = CatalogTest::new().with_api_url(UNREACHABLE_API);

    let stderr = catalog.run_failure(&["ls"]);
    assert!(
        stderr.contains("Failed to fetch projects. Please check the API endpoint and server status.")
    );
}

#[test]
fn test_save_stops_when_list_cannot_load() {
    let catalog = CatalogTest::new().with_api_url(UNREACHABLE_API);

    let stderr = catalog.run_failure(&["save", "1"]);
    assert!(stderr.contains("Failed to fetch projects."));
}

#[test]
fn test_saved_ls_reports_load_failure() {
    let catalog = CatalogTest::new().with_api_url(UNREACHABLE_API);

    let stderr = catalog.run_failure(&["saved", "ls"]);
    assert!(stderr.contains("Failed to fetch saved projects."));
}

#[test]
fn test_portfolio_reports_load_failure() {
    let catalog = CatalogTest::new().with_api_url(UNREACHABLE_API);

    let stderr = catalog.run_failure(&["portfolio"]);
    assert!(stderr.contains("Failed to fetch projects."));
}

#[test]
fn test_create_reports_fallback_message() {
    let catalog = CatalogTest::new().with_api_url(UNREACHABLE_API);

    let stderr = catalog.run_failure(&[
        "create",
        "--title",
        "Alpha",
        "--description",
        "x",
        "--category",
        "Web",
        "--author",
        "A",
        "--image-url",
        "https://img/alpha.png",
    ]);
    assert!(stderr.contains("Failed to add project"));
}

#[test]
fn test_create_rejects_blank_field_before_sending() {
    let catalog = CatalogTest::new().with_api_url(UNREACHABLE_API);

    let stderr = catalog.run_failure(&[
        "create",
        "--title",
        "Alpha",
        "--description",
        "x",
        "--category",
        "Web",
        "--author",
        " ",
        "--image-url",
        "https://img/alpha.png",
    ]);
    assert!(stderr.contains("missing required fields: author"));
}

#[test]
fn test_save_requires_ids() {
    let catalog = CatalogTest::new();
    let stderr = catalog.run_failure(&["save"]);
    assert!(stderr.contains("required"));
}

const PROJECTS: &str = r#"[
    {"id":1,"title":"Alpha","description":"A web shop","category":"Web","author":"Ann","image_url":"https://img/1.png"},
    {"id":2,"title":"Beta","description":"A puzzle","category":"Game","author":"Bob","image_url":"https://img/2.png"}
]"#;

#[test]
fn test_ls_json_lists_and_filters_projects() {
    let server = StubServer::start(vec![("GET", "/api/projects", 200, PROJECTS)]);
    let catalog = CatalogTest::new().with_api_url(&server.url);

    let out = catalog.run_success(&["ls", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let titles: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);

    let out = catalog.run_success(&["ls", "--search", "GAME", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["id"], 2);
}

#[test]
fn test_delete_succeeds_against_server() {
    let server = StubServer::start(vec![
        ("GET", "/api/projects", 200, PROJECTS),
        ("DELETE", "/api/projects/1", 204, ""),
    ]);
    let catalog = CatalogTest::new().with_api_url(&server.url);

    let out = catalog.run_success(&["delete", "1"]);
    assert!(out.contains("Project deleted successfully!"));
}

#[test]
fn test_delete_failure_sets_exit_code() {
    let server = StubServer::start(vec![
        ("GET", "/api/projects", 200, PROJECTS),
        ("DELETE", "/api/projects/2", 500, r#"{"message":"locked"}"#),
    ]);
    let catalog = CatalogTest::new().with_api_url(&server.url);

    let output = catalog.run(&["delete", "2"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Failed to delete project"));
    assert!(stderr.contains("1 of 1 operations failed"));
}

#[test]
fn test_save_json_reports_each_id() {
    let server = StubServer::start(vec![
        ("GET", "/api/projects", 200, PROJECTS),
        ("POST", "/api/saved", 201, r#"{"id":30}"#),
    ]);
    let catalog = CatalogTest::new().with_api_url(&server.url);

    let output = catalog.run(&["--json", "save", "1", "5"]);
    assert!(!output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["success"], true);
    assert_eq!(json[0]["message"], "Project saved successfully!");
    assert_eq!(json[1]["id"], 5);
    assert_eq!(json[1]["success"], false);
}

#[test]
fn test_create_accepts_success_without_project_body() {
    let server = StubServer::start(vec![(
        "POST",
        "/api/projects",
        201,
        r#"{"message":"Project created"}"#,
    )]);
    let catalog = CatalogTest::new().with_api_url(&server.url);

    let out = catalog.run_success(&[
        "create",
        "--title",
        "Alpha",
        "--description",
        "x",
        "--category",
        "Web",
        "--author",
        "A",
        "--image-url",
        "https://img/alpha.png",
    ]);
    assert!(out.contains("Project added successfully!"));
}
