use super::*;

pub fn run(args: ExtractArgs) -> Result<()> {
    run_with_source(&args, &PdftotextSource)
}

pub(super) fn run_with_source(args: &ExtractArgs, source: &dyn PageTextSource) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("run-{}", utc_compact_string(started_ts));

    info!(
        input_dir = %args.input_dir.display(),
        output_dir = %args.output_dir.display(),
        max_pages = args.max_pages,
        run_id = %run_id,
        "starting outline extraction"
    );

    if args.max_pages == 0 {
        bail!("--max-pages must be at least 1");
    }
    if !args.input_dir.is_dir() {
        bail!("input directory not found: {}", args.input_dir.display());
    }
    ensure_directory(&args.output_dir)?;

    let pdf_paths = discover_pdfs(&args.input_dir)?;
    if pdf_paths.is_empty() {
        info!(input_dir = %args.input_dir.display(), "no PDF files found in input directory");
    }

    let extractor = OutlineExtractor::new()?;
    let context = BatchContext {
        output_dir: &args.output_dir,
        max_pages: args.max_pages,
        source,
        extractor: &extractor,
        hash_documents: args.report_path.is_some(),
    };
    let documents = process_batch(&pdf_paths, &context);
    let (completed_count, failed_count) = summarize_batch(&documents);

    info!(
        documents = documents.len(),
        completed = completed_count,
        failed = failed_count,
        "outline extraction completed"
    );

    if let Some(report_path) = &args.report_path {
        let report = BatchReport {
            manifest_version: 1,
            run_id,
            started_at,
            finished_at: now_utc_string(),
            input_dir: args.input_dir.display().to_string(),
            output_dir: args.output_dir.display().to_string(),
            max_pages: args.max_pages,
            document_count: documents.len(),
            completed_count,
            failed_count,
            documents,
        };

        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote batch report");
    }

    Ok(())
}
