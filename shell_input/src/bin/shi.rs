// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `shi` puts the terminal in raw mode and feeds every chunk read from stdin to a
//! [`ModeRouter`], then paints the returned render ops. Submitted lines are echoed
//! back instead of being run. Type `exit`, or press `Ctrl+D` on an empty line, to
//! quit.

use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use miette::IntoDiagnostic;
use r3bl_shell_input::{Collaborators, EditorConfig, END_OF_TRANSMISSION, GlyphMetrics,
                       ModeRouter, RenderOp, RenderOpInterpreter, RenderSurface,
                       SessionId, ShellLookups, SubmissionSink, TracingConfig,
                       UnicodeWidthMetrics};
use std::{env, fs,
          io::{Write, stdout},
          path::PathBuf};
use tokio::io::AsyncReadExt;

use crate::clap_config::CLIArg;

const READ_BUFFER_SIZE: usize = 1024;
const EXIT_COMMAND: &str = "exit";

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.global_options.enable_logging {
        TracingConfig::new_file(cli_arg.global_options.log_file.clone()).install_global()?;
    }

    let config = match &cli_arg.config {
        Some(path) => EditorConfig::try_load(path).into_diagnostic()?,
        None => EditorConfig::default(),
    };
    tracing::debug!(message = "shi starting", config = ?config);

    let lookups = EnvLookups::from_environment();
    let surface = TerminalSurface;
    let mut sink = EchoSink::default();
    let mut router = ModeRouter::new(SessionId::from("shi"), config);
    let mut interpreter = RenderOpInterpreter::new(cli_arg.prompt.clone());

    let _raw_mode = RawModeGuard::enable()?;
    let mut stdout = stdout();
    interpreter
        .apply(&[RenderOp::InsertText(cli_arg.prompt.clone())], &mut stdout)
        .into_diagnostic()?;

    let mut stdin = tokio::io::stdin();
    let mut buffer = [0_u8; READ_BUFFER_SIZE];

    loop {
        let count = stdin.read(&mut buffer).await.into_diagnostic()?;
        if count == 0 {
            break;
        }
        let chunk = &buffer[..count];

        if chunk == END_OF_TRANSMISSION.as_bytes() && router.buffer().is_empty() {
            break;
        }

        let ops = {
            let mut collaborators = Collaborators::idle(&lookups, &mut sink, &surface);
            router.handle_bytes(chunk, &mut collaborators)
        };
        interpreter.apply(&ops, &mut stdout).into_diagnostic()?;

        for line in sink.lines.drain(..) {
            if line == EXIT_COMMAND {
                return Ok(());
            }
            write!(stdout, "you entered: {line}\r\n{}", cli_arg.prompt).into_diagnostic()?;
            stdout.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

/// Leaves raw mode on every exit path, including `?`.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> miette::Result<Self> {
        enable_raw_mode().into_diagnostic()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Nothing useful to do if this fails on the way out.
        disable_raw_mode().ok();
        println!();
    }
}

/// A terminal grid: every cell has the same reference width and the usual terminal
/// palette is assumed.
struct TerminalSurface;

impl GlyphMetrics for TerminalSurface {
    fn glyph_width(&self, grapheme: &str) -> f64 { UnicodeWidthMetrics.glyph_width(grapheme) }

    fn reference_width(&self) -> f64 { UnicodeWidthMetrics.reference_width() }
}

impl RenderSurface for TerminalSurface {
    fn foreground_brightness(&self) -> f64 { 0.9 }

    fn background_brightness(&self) -> f64 { 0.1 }
}

/// Lines submitted at the prompt, echoed back after the render ops are painted.
#[derive(Debug, Default)]
struct EchoSink {
    lines: Vec<String>,
}

impl SubmissionSink for EchoSink {
    fn submit(&mut self, line: &str) { self.lines.push(line.to_string()); }
}

/// Command names from the executables on `PATH`, plus the environment variables. No
/// aliases and no option strings, those belong to a real shell.
#[derive(Debug, Default)]
struct EnvLookups {
    commands: Vec<String>,
    env: Vec<(String, String)>,
}

impl EnvLookups {
    fn from_environment() -> Self {
        let dirs = env::var_os("PATH")
            .map(|path| env::split_paths(&path).collect::<Vec<_>>())
            .unwrap_or_default();
        let it = Self::new(&dirs, env::vars());
        tracing::debug!(message = "Collected command names", count = it.commands.len());
        it
    }

    fn new(dirs: &[PathBuf], env: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut commands = vec![];
        for dir in dirs {
            let Ok(read_dir) = fs::read_dir(dir) else {
                continue;
            };
            commands.extend(
                read_dir
                    .flatten()
                    .filter_map(|entry| entry.file_name().into_string().ok()),
            );
        }
        commands.sort();
        commands.dedup();

        Self {
            commands,
            env: env.into_iter().collect(),
        }
    }
}

impl ShellLookups for EnvLookups {
    fn alias_names(&self) -> Vec<String> { vec![] }

    fn command_names(&self) -> Vec<String> { self.commands.clone() }

    fn environment(&self) -> Vec<(String, String)> { self.env.clone() }

    fn option_characters(&self, _command: &str) -> Option<String> { None }

    fn resolve_alias(&self, name: &str) -> String { name.to_string() }
}

mod clap_config {
    use clap::{Args, Parser};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "shi")]
    #[command(about = "Try out the shell input line editor in your terminal")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArg {
        #[arg(long, short = 'c', help = "Path to a JSON editor config file")]
        pub config: Option<String>,

        #[arg(long, short = 'p', default_value = "$ ", help = "Prompt to display")]
        pub prompt: String,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `shell_input_log.txt` for debugging"
        )]
        pub enable_logging: bool,

        #[arg(
            global = true,
            long,
            requires = "enable_logging",
            help = "Log to this file instead of the default one"
        )]
        pub log_file: Option<String>,
    }
}
