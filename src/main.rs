//! shortcut_gameid 命令行
//!
//! 用法：`shortcut_gameid <HEX>`
//!
//! `<HEX>` 是 target + name 拼接后字节的十六进制字符对编码，
//! 成功时在 stdout 输出十进制 ID。

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};

use shortcut_gameid::config::CliConfig;
use shortcut_gameid::{hex, Error, ErrorKind, ShortcutId};

/// 参数错误时的退出码
const EXIT_USAGE: u8 = 2;

/// 输出到 stderr 的日志，stdout 只留给 ID
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn init_logger(config: &CliConfig) {
    // log 未启用 std feature，没有 set_boxed_logger
    let logger: &'static StderrLogger = Box::leak(Box::new(StderrLogger {
        level: config.log_level,
    }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(config.log_level);
    }
}

fn main() -> ExitCode {
    init_logger(&CliConfig::from_env());

    let args = match collect_args(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(e) => return usage_error(&e),
    };

    if matches!(args.as_slice(), [flag] if flag == "-h" || flag == "--help") {
        print_usage(&mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(id) => {
            println!("{}", id);
            ExitCode::SUCCESS
        }
        Err(e) => usage_error(&e),
    }
}

fn usage_error(e: &Error) -> ExitCode {
    eprintln!("error: {}", e);
    print_usage(&mut std::io::stderr());
    ExitCode::from(EXIT_USAGE)
}

/// 参数必须是 UTF-8，否则按参数错误处理
fn collect_args<I>(args: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|_| {
                Error::new(ErrorKind::InvalidArgument, "argument is not valid UTF-8")
            })
        })
        .collect()
}

fn run(args: &[String]) -> Result<ShortcutId, Error> {
    let arg = match args {
        [arg] => arg,
        [] => return Err(Error::new(ErrorKind::InvalidArgument, "missing hex argument")),
        _ => return Err(Error::new(ErrorKind::InvalidArgument, "expected exactly one argument")),
    };

    let input = hex::decode_pairs(arg)?;
    log::debug!("[CLI] decoded {} input bytes", input.len());

    Ok(ShortcutId::from_bytes(&input))
}

fn print_usage(out: &mut impl Write) {
    let _ = writeln!(out, "Usage: shortcut_gameid <HEX>");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  <HEX>  target and name bytes, concatenated, as hex pairs (e.g. 466F6F)"
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Prints the 64-bit shortcut id in decimal.");
    let _ = writeln!(out, "Set SHORTCUT_GAMEID_LOG=debug for diagnostics on stderr.");
}
