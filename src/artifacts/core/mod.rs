//! Output plumbing shared by the commands
//!
//! Long diffs are shown through the `minus` pager when stdout is a terminal
//! and `NO_PAGER` is not set; otherwise output goes straight to stdout.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Adapts the minus pager to `std::io::Write`
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where command output ends up
pub enum Output {
    Pager(Pager),
    Stdout,
}

impl Output {
    pub fn detect() -> Self {
        let paging_disabled = std::env::var_os("NO_PAGER").is_some();

        if !paging_disabled && io::stdout().is_terminal() {
            Output::Pager(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
            Output::Stdout => Box::new(io::stdout()),
        }
    }

    /// Hands the collected output to the pager, if there is one
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Pager(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}
