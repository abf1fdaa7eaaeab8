pub mod compiler;
pub mod config;
pub mod fs;
pub mod shader;

pub use compiler::Compiler;
pub use config::{Args, Config};
pub use shader::{ExtensionCase, FileList, ShaderStage};

use std::io::Write;

/// Collects the shaders below the configured root and compiles them in one go.
///
/// Returns the exit code the process should end with: the compiler's own
/// code, `1` if it was killed by a signal, `0` for a dry run.
pub fn run(config: &Config) -> Result<i32, anyhow::Error> {
    let files = FileList::collect(&config.root, config.case, config.sort);
    log::info!("collected {} shader(s) below {}", files.len(), config.root.display());

    if config.dry_run {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", config.compiler.program().to_string_lossy())?;
        for arg in config.compiler.args(&files) {
            writeln!(out, "{}", arg.to_string_lossy())?;
        }
        return Ok(0);
    }

    let status = config.compiler.invoke(&files)?;
    Ok(status.code().unwrap_or(1))
}
