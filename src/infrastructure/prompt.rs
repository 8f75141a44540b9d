//! 终端交互：多个 .env 文件时让用户选择

use crate::domain::error::Result;
use crate::domain::models::EnvFile;
use crate::domain::repositories::EnvFileSelector;
use crate::infrastructure::paths::display_relative;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// 从输入流读取编号的选择器，提示信息写到 stderr
pub struct PromptSelector<R> {
    input: Mutex<R>,
    root: PathBuf,
}

impl PromptSelector<BufReader<Stdin>> {
    pub fn stdin(root: &Path) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), root)
    }
}

impl<R> PromptSelector<R> {
    pub fn new(input: R, root: &Path) -> Self {
        Self {
            input: Mutex::new(input),
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl<R> EnvFileSelector for PromptSelector<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn select(&self, candidates: &[EnvFile]) -> Result<Option<EnvFile>> {
        eprintln!("Select the .env file to add the variable to:");
        for (i, file) in candidates.iter().enumerate() {
            eprintln!("  {}) {}", i + 1, display_relative(&self.root, file.path()));
        }
        eprint!("> ");

        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }

        Ok(parse_choice(&line, candidates.len()).map(|i| candidates[i].clone()))
    }
}

/// 解析 1 开始的编号，空输入或越界返回 None
fn parse_choice(input: &str, count: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<EnvFile> {
        vec![EnvFile::new("/w/.env"), EnvFile::new("/w/.env.local")]
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("2\n", 2), Some(1));
        assert_eq!(parse_choice(" 1 ", 2), Some(0));
        assert_eq!(parse_choice("0", 2), None);
        assert_eq!(parse_choice("3", 2), None);
        assert_eq!(parse_choice("", 2), None);
        assert_eq!(parse_choice("abc", 2), None);
    }

    #[tokio::test]
    async fn test_select_by_number() {
        let selector = PromptSelector::new(&b"2\n"[..], Path::new("/w"));
        let chosen = selector.select(&candidates()).await.unwrap();
        assert_eq!(chosen, Some(EnvFile::new("/w/.env.local")));
    }

    #[tokio::test]
    async fn test_eof_cancels() {
        let selector = PromptSelector::new(&b""[..], Path::new("/w"));
        assert_eq!(selector.select(&candidates()).await.unwrap(), None);
    }
}
