//! Static-content server
//!
//! One unauthenticated endpoint: every request gets the complete card page,
//! `text/html; charset=utf-8`, status 200, unconditionally. No routing, no
//! request parameters, no server-side state - the card behavior runs
//! client-side once the document is delivered.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::app::DEFAULT_TEXT;
use crate::core::Card;
use crate::render::{HtmlRenderer, Renderer};

/// Bingo card server
pub struct Server {
    /// Listening port
    pub port: u16,
    /// Bind address (127.0.0.1 for local, 0.0.0.0 for network)
    pub bind: String,
}

impl Server {
    pub fn new(port: u16, bind: String) -> Self {
        Self { port, bind }
    }

    /// Run the accept loop
    pub async fn run(&self) -> Result<()> {
        let renderer = HtmlRenderer::new();
        let page = Arc::new(renderer.render_page(&Card::from_text(DEFAULT_TEXT).snapshot()));

        let listener = TcpListener::bind(format!("{}:{}", self.bind, self.port)).await?;
        info!("Serving at http://{}:{}", self.bind, self.port);

        loop {
            match listener.accept().await {
                Ok((socket, addr)) => {
                    debug!("Connection from {}", addr);
                    let page = page.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(socket, page).await {
                            error!("Connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    error!("Accept error: {}", e);
                }
            }
        }
    }
}

/// Answer a single request with the card page
async fn handle_connection(socket: TcpStream, page: Arc<String>) -> Result<()> {
    let (reader, mut writer) = socket.into_split();
    let mut reader = BufReader::new(reader);

    // Consume the request line and headers; nothing in them is used
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(());
    }
    debug!("Request: {}", line.trim_end());
    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    writer.write_all(http_response(&page).as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Build the unconditional 200 response around `body`
fn http_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {}",
        body.len(),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_headers() {
        let response = http_response("<html></html>");
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: text/html; charset=utf-8\r\n"));
        assert!(response.contains("Content-Length: 13\r\n"));
        assert!(response.ends_with("<html></html>"));
    }

    #[test]
    fn test_content_length_counts_bytes() {
        // multi-byte glyphs must be counted in bytes, not chars
        let response = http_response("⭕");
        assert!(response.contains(&format!("Content-Length: {}\r\n", "⭕".len())));
    }

    #[tokio::test]
    async fn test_serves_page_unconditionally() {
        use tokio::io::AsyncReadExt;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let page = Arc::new("<html>card</html>".to_string());

        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            handle_connection(socket, page).await.unwrap();
        });

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET /anything?x=1 HTTP/1.1\r\nHost: test\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        client.read_to_string(&mut response).await.unwrap();
        server.await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with("<html>card</html>"));
    }
}
