//! In-memory stand-ins for the network, the external programs and the terminal.

#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    path::{Path, PathBuf},
};

use bytes::Bytes;
use manga_cli::{
    errors::{Error, Result},
    external::{Archiver, Viewer},
    fetch::Fetcher,
    prompt::Prompt,
};

/// Serves canned bodies and records every URL requested.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    images: HashMap<String, Bytes>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_image(mut self, url: &str, data: &'static [u8]) -> Self {
        self.images.insert(url.to_string(), Bytes::from_static(data));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

fn not_served(url: &str) -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("no fake response for {url}"),
    ))
}

impl Fetcher for FakeFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| not_served(url))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        self.requests.borrow_mut().push(url.to_string());
        self.images.get(url).cloned().ok_or_else(|| not_served(url))
    }
}

/// Records the file list it was asked to pack and writes a marker file at the output.
#[derive(Default)]
pub struct RecordingArchiver {
    pub calls: RefCell<Vec<(Vec<PathBuf>, PathBuf)>>,
}

impl Archiver for RecordingArchiver {
    async fn archive(&self, files: &[PathBuf], output: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((files.to_vec(), output.to_path_buf()));
        std::fs::write(output, b"cbz")?;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingViewer {
    pub opened: RefCell<Vec<PathBuf>>,
}

impl Viewer for RecordingViewer {
    async fn open(&self, path: &Path) -> Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Answers prompts from a fixed script; an exhausted script is an end-of-input error.
pub struct ScriptedPrompt {
    lines: RefCell<VecDeque<&'static str>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(lines: &[&'static str]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().copied().collect()),
            asked: RefCell::default(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt_line(&self, message: &str) -> Result<String> {
        self.asked.borrow_mut().push(message.to_string());
        self.lines
            .borrow_mut()
            .pop_front()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("script exhausted at {message:?}"),
                ))
            })
    }
}

pub fn search_html(hits: &[(&str, &str)]) -> String {
    let items: String = hits
        .iter()
        .map(|(name, link)| {
            format!(r#"<div class="item-right"><h3><a href="{link}">{name}</a></h3></div>"#)
        })
        .collect();
    format!(r#"<html><body><div class="panel-search-story">{items}</div></body></html>"#)
}

pub fn chapter_html(srcs: &[&str]) -> String {
    let imgs: String = srcs
        .iter()
        .map(|src| format!(r#"<img src="{src}" alt="page">"#))
        .collect();
    format!(r#"<html><body><div class="container-chapter-reader">{imgs}</div></body></html>"#)
}
