use crate::log::appender::LogAppender;
use anyhow::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// 文件输出器
///
/// 以追加模式打开文件，每条日志一行。不保证崩溃时已写入的数据落盘。
pub struct FileAppender {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl FileAppender {
    /// 打开（必要时创建）日志文件及其父目录
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            path,
        })
    }

    /// 日志文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogAppender for FileAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(formatted_message.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush()?;
        Ok(())
    }
}
