use std::io::{self, BufWriter};

use anyhow::Context;

use stockline_shell::{Session, ShellConfig};

fn main() -> anyhow::Result<()> {
    let (config, warnings) = ShellConfig::from_env();
    stockline_observability::init_with(&config.observability);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let session = Session::new(stdin, stdout, config.output);
    let mut out = session.run().context("interactive session failed")?;

    io::Write::flush(&mut out).context("failed to flush stdout")?;
    Ok(())
}
