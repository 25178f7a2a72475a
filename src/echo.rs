//! Echo session
//!
//! Prompts on the UART, reads one line with local echo, and sends it back.

use crate::config::{LINE_END, PROMPT, RESPONSE_PREFIX};
use crate::drivers::{Uart, UartError, UartRegisters};

/// Run one prompt/read/echo exchange on `uart` using `buf` for the line.
///
/// Returns the length of the line. If the line does not fit, the truncated
/// part is still echoed back and `LineTooLong` is returned.
///
/// Nothing is logged here: the caller usually holds the console lock for
/// `uart`, and the console logger needs that same lock.
pub fn run<R: UartRegisters>(uart: &mut Uart<R>, buf: &mut [u8]) -> Result<usize, UartError> {
    uart.send_str(PROMPT);
    let result = uart.recv_line(buf);

    let len = match result {
        Ok(len) => len,
        Err(UartError::LineTooLong { capacity }) => capacity - 1,
        Err(e) => return Err(e),
    };

    uart.send_str(RESPONSE_PREFIX);
    uart.send_string(&buf[..len]);
    uart.send_str(LINE_END);

    result
}
