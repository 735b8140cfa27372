use clap::Parser;

mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "speedup-viz")]
#[command(about = "Parallel vs sequential benchmark speedup charts", long_about = None)]
struct Cli {
    /// Timing log of the parallel run.
    #[arg(long, default_value = "tempo_execucao_paralelo.txt")]
    parallel: String,

    /// Timing log of the sequential run.
    #[arg(long, default_value = "tempo_execucao_sequencial.txt")]
    sequential: String,

    /// Output path for the execution-time comparison chart.
    #[arg(long, default_value = "comparacao_tempo_execucao.png")]
    time_chart: String,

    /// Output path for the speedup chart.
    #[arg(long, default_value = "speedup.png")]
    speedup_chart: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Parse both timing logs.
    let parallel = log::parse_timing_file(&cli.parallel)?;
    let sequential = log::parse_timing_file(&cli.sequential)?;

    // 2) Join them and derive the speedup series before any chart file is
    //    created.
    let cmp = model::build_comparison(&parallel, &sequential)?;

    // 3) Render both charts.
    render::render_time_chart(&cmp, &cli.time_chart)?;
    println!("Wrote {}", cli.time_chart);

    render::render_speedup_chart(&cmp, &cli.speedup_chart)?;
    println!("Wrote {}", cli.speedup_chart);

    Ok(())
}
