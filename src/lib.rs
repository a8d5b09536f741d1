//! postpulse - sentiment and engagement analysis for social media posts.
//!
//! Accepts text, a PDF, or an image over HTTP, extracts text from files with
//! Poppler/Tesseract, and asks Gemini for a structured analysis.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod server;
pub mod service;

#[cfg(test)]
mod test_support;
