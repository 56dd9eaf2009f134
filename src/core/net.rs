// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::error::Error;
use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{NET_TIMEOUT_SECS, USER_AGENT};

/// Split an http URL into (host, path). There is no TLS here, so https
/// is refused up front with a pointer at file mode.
pub fn split_url(url: &str) -> Result<(String, String), Box<dyn Error>> {
    let rest = if let Some(r) = url.strip_prefix("http://") {
        r
    } else if url.starts_with("https://") {
        return Err("https is not supported; save the page in the browser and load the file instead".into());
    } else if url.contains("://") {
        return Err(format!("Unsupported URL scheme: {}", url).into());
    } else {
        url
    };

    let (host, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    if host.is_empty() {
        return Err(format!("No host in URL: {}", url).into());
    }
    Ok((s!(host), s!(path)))
}

pub fn fetch(url: &str) -> Result<String, Box<dyn Error>> {
    let (host, path) = split_url(url)?;
    http_get(&host, &path)
}

pub fn http_get(host: &str, path: &str) -> Result<String, Box<dyn Error>> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_url_accepts_http_and_bare_hosts() {
        assert_eq!(
            split_url("http://www.blocket.se/bilar?page=2").unwrap(),
            (s!("www.blocket.se"), s!("/bilar?page=2"))
        );
        assert_eq!(
            split_url("example.com").unwrap(),
            (s!("example.com"), s!("/"))
        );
    }

    #[test]
    fn split_url_rejects_https_with_file_hint() {
        let err = split_url("https://www.blocket.se/bilar").unwrap_err();
        assert!(err.to_string().contains("save the page"));
    }

    #[test]
    fn split_url_rejects_other_schemes_and_empty_host() {
        assert!(split_url("ftp://host/x").is_err());
        assert!(split_url("http:///nohost").is_err());
    }
}
