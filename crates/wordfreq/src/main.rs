//! Wordfreq - most used words on a web page
//!
//! Usage: wordfreq [OPTIONS] <URL>

mod config;
mod report;

use std::env;
use std::error::Error;
use std::fs;
use std::process::ExitCode;
use std::time::SystemTime;

use log::{debug, info};

use wordfreq_analyser::{analyse, WordCount};
use wordfreq_html::parse_html;
use wordfreq_net::{ClientConfig, HttpClient};

use crate::config::{normalize_url, parse_args, Command, Config, Source};
use crate::report::{format_summary, save_to_file};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("wordfreq");

    match parse_args(args.iter().skip(1).cloned()) {
        Ok(Command::Help) => {
            print_usage(program);
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("Wordfreq {}", VERSION);
            ExitCode::SUCCESS
        }
        Ok(Command::Run(config)) => {
            if let Err(e) = run(&config).await {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Wordfreq {} - most used words on a web page

USAGE:
    {} [OPTIONS] <URL>

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    -n, --top <N>           Number of words to report (default 10)
    -t, --timeout <SECS>    HTTP request timeout (default 30)
    -o, --output-dir <DIR>  Where to write the JSON report (default .)
    --file <PATH>           Analyse a local HTML file instead of a URL

EXAMPLES:
    {} https://example.com
    {} -n 20 example.com
    {} --file page.html
"#,
        VERSION, program, program, program, program
    );
}

/// Fetch or read the page, count its words, print and save the result
async fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let (label, html) = match &config.source {
        Source::Url(url_str) => {
            let url = normalize_url(url_str)?;
            let html = fetch(&url, config.timeout_secs).await?;
            (url.to_string(), html)
        }
        Source::File(path) => (path.display().to_string(), fs::read_to_string(path)?),
    };

    let most_used = most_used_words(&html, config.top);

    println!("{}", format_summary(&label, &most_used));

    let path = save_to_file(&config.output_dir, SystemTime::now(), &most_used)?;
    info!("Saved {} words to {}", most_used.len(), path.display());
    println!("Saved results to {}", path.display());

    Ok(())
}

/// Fetch a page body, failing on non-2xx statuses
async fn fetch(url: &url::Url, timeout_secs: u64) -> Result<String, Box<dyn Error>> {
    let client = HttpClient::with_config(ClientConfig { timeout_secs })?;
    let response = client.get(url).await?.error_for_status()?;

    info!("Received {} bytes", response.body.len());
    debug!("Content-Type: {}", response.content_type().unwrap_or("unknown"));

    Ok(response.text_lossy())
}

/// Parse HTML and count the words of its visible text
fn most_used_words(html: &str, top: usize) -> Vec<WordCount> {
    let document = parse_html(html);
    let text = document.text();

    info!("Extracted {} characters of text from {} nodes", text.len(), document.len());

    analyse(&text).most_used_words(top).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head>
            <title>Title should be hidden</title>
          </head>
          <body>
            <!-- Can't see me -->
            <p>One two Three Two tHree+three</p>
          </body>
        </html>
        "#;

    #[test]
    fn test_most_used_words() {
        assert_eq!(
            most_used_words(PAGE, 10),
            [
                WordCount("three".into(), 3),
                WordCount("two".into(), 2),
                WordCount("one".into(), 1),
            ]
        );
        assert_eq!(most_used_words(PAGE, 1), [WordCount("three".into(), 3)]);
    }

    #[tokio::test]
    async fn test_run_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.html");
        fs::write(&page, PAGE).unwrap();

        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let mut config = Config::new(Source::File(page));
        config.output_dir = out.clone();
        run(&config).await.unwrap();

        let reports: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().path()).collect();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].extension().and_then(|e| e.to_str()), Some("json"));

        let saved: serde_json::Value = serde_json::from_slice(&fs::read(&reports[0]).unwrap()).unwrap();
        assert_eq!(saved, serde_json::json!([["three", 3], ["two", 2], ["one", 1]]));
    }

    /// Serve one canned response on a local port and return its URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "{}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/page", addr)
    }

    #[tokio::test]
    async fn test_run_with_url() {
        let url = serve_once("HTTP/1.1 200 OK", "<p>red green red</p>").await;
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::new(Source::Url(url));
        config.output_dir = dir.path().to_path_buf();
        run(&config).await.unwrap();

        let reports: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().path()).collect();
        assert_eq!(reports.len(), 1);

        let saved: serde_json::Value = serde_json::from_slice(&fs::read(&reports[0]).unwrap()).unwrap();
        assert_eq!(saved, serde_json::json!([["red", 2], ["green", 1]]));
    }

    #[tokio::test]
    async fn test_run_with_http_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "<p>missing</p>").await;
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::new(Source::Url(url));
        config.output_dir = dir.path().to_path_buf();

        let err = run(&config).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error: 404");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_with_invalid_url() {
        let config = Config::new(Source::Url("http://".to_string()));
        let err = run(&config).await.unwrap_err();
        assert!(err.to_string().starts_with("Invalid URL"));
    }

    #[tokio::test]
    async fn test_run_with_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(Source::File(dir.path().join("missing.html")));
        assert!(run(&config).await.is_err());
    }
}
