use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Command, Output};
use std::thread;
use tempfile::TempDir;

/// Address nothing listens on, so every remote call fails fast
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Helper struct to run catalog commands in an isolated temp directory
pub struct CatalogTest {
    pub temp_dir: TempDir,
    binary_path: String,
    api_url: Option<String>,
}

impl CatalogTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let binary_path = if cfg!(debug_assertions) {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/catalog")
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/catalog")
        };

        let binary_path = if std::path::Path::new(binary_path).exists() {
            binary_path.to_string()
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/catalog").to_string()
        };

        CatalogTest {
            temp_dir,
            binary_path,
            api_url: None,
        }
    }

    /// Point every command at `url` through the environment override
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("CATALOG_ROOT")
            .env_remove("CATALOG_API_URL")
            .env("NO_COLOR", "1");
        if let Some(url) = &self.api_url {
            command.env("CATALOG_API_URL", url);
        }
        command.output().expect("Failed to execute catalog command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_config(&self) -> String {
        let path = self.temp_dir.path().join(".catalog").join("config.yaml");
        fs::read_to_string(path).expect("Failed to read config file")
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".catalog");
        fs::create_dir_all(&dir).expect("Failed to create .catalog directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }
}

/// `(method, path, status, body)`
pub type Route = (&'static str, &'static str, u16, &'static str);

/// Local HTTP server answering each route with a canned response
pub struct StubServer {
    pub url: String,
}

impl StubServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let url = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read stub address")
        );

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                answer(stream, &routes);
            }
        });

        StubServer { url }
    }
}

fn answer(mut stream: TcpStream, routes: &[Route]) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let Ok(n) = stream.read(&mut chunk) else {
            return;
        };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let mut request_line = head.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("");
    let path = request_line.next().unwrap_or("");

    let (status, body) = routes
        .iter()
        .find(|(m, p, _, _)| *m == method && *p == path)
        .map(|(_, _, status, body)| (*status, *body))
        .unwrap_or((404, "{}"));
    let response = if status == 204 {
        "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string()
    } else {
        format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    };
    let _ = stream.write_all(response.as_bytes());
}
