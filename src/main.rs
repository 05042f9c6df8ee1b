use clap::Parser;
use telegiganten_ranking::core::CatalogSource;
use telegiganten_ranking::utils::error::{CatalogError, ErrorSeverity};
use telegiganten_ranking::utils::{logger, validation::Validate};
use telegiganten_ranking::{
    CatalogJob, CliConfig, FileSource, HttpSource, JobConfig, LocalStorage, RankingConfig,
    RankingEngine, SortPipeline, SourceSpec,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting telegiganten-ranking");
    tracing::debug!("CLI config: {:?}", cli);

    let (job, engine) = match prepare(&cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be read or written");
        display_plan(&job, &engine);
        return Ok(());
    }

    let result = match &job.source {
        SourceSpec::File(path) => {
            let source = FileSource::new(path.clone(), job.settings.name_field.clone());
            run(source, &job, engine).await
        }
        SourceSpec::Http { endpoint, timeout } => {
            let source =
                HttpSource::with_timeout(endpoint.clone(), job.settings.name_field.clone(), *timeout);
            run(source, &job, engine).await
        }
    };

    match result {
        Ok(destination) => {
            tracing::info!("✅ Ranking completed, output: {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Ranking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            // 根據錯誤嚴重程度決定退出碼
            std::process::exit(exit_code(e.severity()));
        }
    }

    Ok(())
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn prepare(cli: &CliConfig) -> Result<(JobConfig, RankingEngine), CatalogError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading ranking configuration from: {}", path);
            let config = RankingConfig::from_file(path)?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let job = cli.to_job(file.as_ref())?;
    job.validate()?;

    let engine = match &file {
        Some(config) => RankingEngine::new(config.to_tables()?),
        None => RankingEngine::default(),
    };
    Ok((job, engine))
}

async fn run<C: CatalogSource>(
    source: C,
    job: &JobConfig,
    engine: RankingEngine,
) -> Result<String, CatalogError> {
    let storage = LocalStorage::new(job.output_dir.clone());
    let pipeline = SortPipeline::new(source, storage, engine, job.settings.clone());
    CatalogJob::new(pipeline).run().await
}

fn display_plan(job: &JobConfig, engine: &RankingEngine) {
    let tables = engine.tables();
    tracing::info!("📋 Plan:");
    tracing::info!("  Kind: {}", job.settings.kind);
    if let Some(brand) = &job.settings.brand {
        tracing::info!(
            "  Brand: {} ({:?})",
            brand,
            engine.model_comparator(brand).family()
        );
    }
    tracing::info!("  Source: {:?}", job.source);
    tracing::info!("  Name field: {}", job.settings.name_field);
    tracing::info!("  Format: {:?}", job.settings.format);
    tracing::info!(
        "  Output: {}",
        job.settings.output_file.as_deref().unwrap_or("stdout")
    );
    tracing::info!(
        "  Tables: {} brands, {} repair slots, {} title rules",
        tables.brand_order.len(),
        tables.repair_title_order.len(),
        tables.repair_rules.len()
    );
}
