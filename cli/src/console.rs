use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::ActionError;

/// Line-oriented terminal: questions and status lines go to `out`, failures
/// to `err`.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R, W, E> Console<R, W, E>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Prints `question` without a newline and waits for one line of input.
    ///
    /// The returned answer has its line terminator and surrounding
    /// whitespace removed. End of input is an error.
    pub async fn prompt(&mut self, question: &str) -> Result<String, ActionError> {
        self.out.write_all(question.as_bytes()).await?;
        self.out.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Err(ActionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub async fn say(&mut self, line: &str) -> std::io::Result<()> {
        write_line(&mut self.out, line).await
    }

    pub async fn warn(&mut self, line: &str) -> std::io::Result<()> {
        write_line(&mut self.err, line).await
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}

async fn write_line<W: AsyncWrite + Unpin>(w: &mut W, line: &str) -> std::io::Result<()> {
    w.write_all(line.as_bytes()).await?;
    w.write_all(b"\n").await?;
    w.flush().await
}
