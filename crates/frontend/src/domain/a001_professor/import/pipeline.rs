//! Bulk import of professors from the "docentes" spreadsheet.
//!
//! One invocation runs strictly in order: file gate, spreadsheet engine,
//! workbook decode, sheet lookup, header check, row extraction, mapping and
//! filtering, submit. The first failure ends the invocation. The page owns
//! one pipeline; its in-flight flag drops a second click while a run is active.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a001_professor::{ImportResponse, Professor};

use super::mapping::{build_batch, ExcludedRow};
use super::template::PROFESSOR_TEMPLATE;
use crate::shared::excel_importer::file_gate::check_file;
use crate::shared::excel_importer::parser::{extract_rows, find_sheet, validate_header};
use crate::shared::excel_importer::{FileSource, ImportError, SpreadsheetEngine};
use crate::shared::notify::{Notice, Severity};

/// Sends the filtered batch to the backend
pub trait BatchSubmitter {
    fn submit(
        &self,
        batch: &[Professor],
    ) -> impl Future<Output = Result<ImportResponse, ImportError>>;
}

/// Where the pipeline reports progress and outcome
pub trait ImportPresenter {
    fn set_busy(&self, busy: bool);
    fn notify(&self, notice: Notice);
    fn show_report(&self, report: &ImportReport);
}

/// Outcome of a successful invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub submitted: usize,
    pub excluded: Vec<ExcludedRow>,
    pub rows_beyond_limit: usize,
    pub response: ImportResponse,
}

impl ImportReport {
    pub fn summary_notice(&self) -> Notice {
        let (mut severity, mut lines) = match &self.response {
            ImportResponse::Results(_) => {
                let (ok, failed) = self.response.tally().unwrap_or_default();
                let severity = if failed == 0 {
                    Severity::Success
                } else {
                    Severity::Warning
                };
                (
                    severity,
                    vec![format!(
                        "Importação concluída: {} enviado(s), {} com sucesso, {} com erro.",
                        self.submitted, ok, failed
                    )],
                )
            }
            ImportResponse::Summary(summary) => {
                let message = if summary.message.is_empty() {
                    format!("Importação concluída: {} enviado(s).", self.submitted)
                } else {
                    summary.message.clone()
                };
                (Severity::Success, vec![message])
            }
            ImportResponse::Other(_) => (
                Severity::Success,
                vec![format!(
                    "Importação concluída: {} enviado(s).",
                    self.submitted
                )],
            ),
        };

        if !self.excluded.is_empty() {
            severity = Severity::Warning;
            let rows: Vec<String> = self
                .excluded
                .iter()
                .map(|e| format!("{} ({})", e.row_number, e.reason))
                .collect();
            lines.push(format!(
                "{} linha(s) ignorada(s): {}",
                self.excluded.len(),
                rows.join(", ")
            ));
        }
        if self.rows_beyond_limit > 0 {
            severity = Severity::Warning;
            lines.push(format!(
                "{} linha(s) além do limite de {} professores não foram processadas.",
                self.rows_beyond_limit, PROFESSOR_TEMPLATE.max_rows
            ));
        }

        Notice::new(severity, lines.join("\n"))
    }
}

/// Per-page "an import is running" flag
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicBool>);

pub struct InFlightGuard(Arc<AtomicBool>);

impl InFlight {
    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlightGuard(Arc::clone(&self.0)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Keeps the presenter busy until dropped
struct BusyScope<'a, P: ImportPresenter>(&'a P);

impl<'a, P: ImportPresenter> BusyScope<'a, P> {
    fn enter(presenter: &'a P) -> Self {
        presenter.set_busy(true);
        Self(presenter)
    }
}

impl<P: ImportPresenter> Drop for BusyScope<'_, P> {
    fn drop(&mut self) {
        self.0.set_busy(false);
    }
}

#[derive(Debug, Clone)]
pub struct BulkImportPipeline<E, S> {
    engine: E,
    submitter: S,
    in_flight: InFlight,
}

impl<E, S> BulkImportPipeline<E, S>
where
    E: SpreadsheetEngine,
    S: BatchSubmitter,
{
    pub fn new(engine: E, submitter: S) -> Self {
        Self {
            engine,
            submitter,
            in_flight: InFlight::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.is_active()
    }

    pub async fn run<F, P>(&self, file: &F, presenter: &P) -> Result<ImportReport, ImportError>
    where
        F: FileSource,
        P: ImportPresenter,
    {
        let Some(_in_flight) = self.in_flight.try_acquire() else {
            log::warn!("Importação já em andamento; novo pedido ignorado");
            return Err(ImportError::AlreadyRunning);
        };
        let _busy = BusyScope::enter(presenter);

        let result = self.execute(file).await;
        match &result {
            Ok(report) => {
                log::info!(
                    "Importação concluída: {} enviado(s), {} ignorado(s)",
                    report.submitted,
                    report.excluded.len()
                );
                presenter.show_report(report);
                presenter.notify(report.summary_notice());
            }
            Err(e) => {
                log::error!("Importação falhou: {}", e);
                presenter.notify(e.to_notice());
            }
        }
        result
    }

    async fn execute<F: FileSource>(&self, file: &F) -> Result<ImportReport, ImportError> {
        let name = file.name();
        check_file(&name, file.size())?;
        log::info!("Importando {}", name);

        self.engine.ensure_loaded().await?;
        let bytes = file.bytes().await?;
        let workbook = self.engine.read(&bytes)?;

        let sheet = find_sheet(&workbook, &PROFESSOR_TEMPLATE)?;
        validate_header(&sheet, &PROFESSOR_TEMPLATE)?;
        let extracted = extract_rows(&sheet, &PROFESSOR_TEMPLATE);
        log::info!("{} linha(s) lida(s) da planilha", extracted.rows.len());

        let batch = build_batch(extracted)?;
        let response = self.submitter.submit(&batch.records).await?;

        Ok(ImportReport {
            submitted: batch.records.len(),
            excluded: batch.excluded,
            rows_beyond_limit: batch.rows_beyond_limit,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_professor::import::template::HEADERS;
    use crate::shared::excel_importer::types::memory::{MemorySheet, MemoryWorkbook};
    use crate::shared::excel_importer::CellValue;
    use contracts::domain::a001_professor::ImportResult;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    struct FakeEngine {
        load: Result<(), ImportError>,
        workbook: MemoryWorkbook,
    }

    impl SpreadsheetEngine for FakeEngine {
        type Workbook = MemoryWorkbook;

        async fn ensure_loaded(&self) -> Result<(), ImportError> {
            self.load.clone()
        }

        fn read(&self, _bytes: &[u8]) -> Result<MemoryWorkbook, ImportError> {
            Ok(self.workbook.clone())
        }
    }

    struct FakeFile {
        name: &'static str,
        size: u64,
    }

    impl FileSource for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }

        async fn bytes(&self) -> Result<Vec<u8>, ImportError> {
            Ok(vec![0; 4])
        }
    }

    struct FakeSubmitter {
        calls: Cell<usize>,
        received: RefCell<Vec<Professor>>,
        reply: Result<ImportResponse, ImportError>,
    }

    impl FakeSubmitter {
        fn replying(reply: Result<ImportResponse, ImportError>) -> Self {
            Self {
                calls: Cell::new(0),
                received: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    impl BatchSubmitter for FakeSubmitter {
        async fn submit(&self, batch: &[Professor]) -> Result<ImportResponse, ImportError> {
            self.calls.set(self.calls.get() + 1);
            *self.received.borrow_mut() = batch.to_vec();
            self.reply.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Busy(bool),
        Notice(Severity),
        Report(usize),
    }

    #[derive(Default)]
    struct RecordingPresenter {
        events: RefCell<Vec<Event>>,
        last_message: RefCell<String>,
    }

    impl ImportPresenter for RecordingPresenter {
        fn set_busy(&self, busy: bool) {
            self.events.borrow_mut().push(Event::Busy(busy));
        }

        fn notify(&self, notice: Notice) {
            self.events.borrow_mut().push(Event::Notice(notice.severity));
            *self.last_message.borrow_mut() = notice.message;
        }

        fn show_report(&self, report: &ImportReport) {
            self.events.borrow_mut().push(Event::Report(report.submitted));
        }
    }

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|s| CellValue::from(*s)).collect()
    }

    fn docentes_sheet(data: &[Vec<CellValue>]) -> MemorySheet {
        let mut sheet = MemorySheet::default();
        sheet.set_row(0, text_row(&["Planilha de docentes"]));
        sheet.set_row(11, text_row(HEADERS));
        for (i, row) in data.iter().enumerate() {
            sheet.set_row(12 + i, row.clone());
        }
        sheet
    }

    fn professor_row(seq: usize, matricula: &str, nome: &str) -> Vec<CellValue> {
        let seq = seq.to_string();
        text_row(&[
            seq.as_str(),
            matricula,
            nome,
            "CLT",
            "Assistente",
            "40",
            "8",
            "2",
            "",
            "",
            "",
            "",
        ])
    }

    fn engine_with(sheet_name: &str, sheet: MemorySheet) -> FakeEngine {
        FakeEngine {
            load: Ok(()),
            workbook: MemoryWorkbook::default().with_sheet(sheet_name, sheet),
        }
    }

    fn xlsx() -> FakeFile {
        FakeFile {
            name: "docentes.xlsx",
            size: 2048,
        }
    }

    fn ok_results(n: usize) -> Result<ImportResponse, ImportError> {
        Ok(ImportResponse::Results(
            (0..n)
                .map(|i| ImportResult {
                    matricula: i.to_string(),
                    nome: String::new(),
                    sucesso: true,
                    mensagem: "ok".into(),
                })
                .collect(),
        ))
    }

    #[test]
    fn test_happy_path_with_numeric_cells() {
        let mut row = professor_row(1, "", "Ana Silva");
        row[1] = CellValue::Number(1001.0);
        row[5] = CellValue::Number(12.5);
        let pipeline = BulkImportPipeline::new(
            engine_with("Docentes", docentes_sheet(&[row])),
            FakeSubmitter::replying(ok_results(1)),
        );
        let presenter = RecordingPresenter::default();

        let report = block_on(pipeline.run(&xlsx(), &presenter)).unwrap();

        assert_eq!(report.submitted, 1);
        let sent = pipeline.submitter.received.borrow();
        assert_eq!(sent[0].matricula.value(), 1001);
        assert_eq!(sent[0].carga_horaria, Some(12));
        assert_eq!(
            *presenter.events.borrow(),
            vec![
                Event::Busy(true),
                Event::Report(1),
                Event::Notice(Severity::Success),
                Event::Busy(false),
            ]
        );
        assert!(!pipeline.is_running());
    }

    #[test]
    fn test_empty_batch_never_submits() {
        let rows = vec![professor_row(1, "", "Sem matrícula"), professor_row(2, "7", "")];
        let pipeline = BulkImportPipeline::new(
            engine_with("docentes", docentes_sheet(&rows)),
            FakeSubmitter::replying(ok_results(0)),
        );
        let presenter = RecordingPresenter::default();

        let err = block_on(pipeline.run(&xlsx(), &presenter)).unwrap_err();

        assert_eq!(err, ImportError::EmptyBatch);
        assert_eq!(pipeline.submitter.calls.get(), 0);
        assert_eq!(presenter.events.borrow().last(), Some(&Event::Busy(false)));
    }

    #[test]
    fn test_submit_timeout_releases_busy_state() {
        let pipeline = BulkImportPipeline::new(
            engine_with("docentes", docentes_sheet(&[professor_row(1, "5", "Eva")])),
            FakeSubmitter::replying(Err(ImportError::SubmitTimeout { seconds: 30 })),
        );
        let presenter = RecordingPresenter::default();

        let err = block_on(pipeline.run(&xlsx(), &presenter)).unwrap_err();

        assert_eq!(err, ImportError::SubmitTimeout { seconds: 30 });
        assert_eq!(
            *presenter.events.borrow(),
            vec![
                Event::Busy(true),
                Event::Notice(Severity::Danger),
                Event::Busy(false),
            ]
        );
        assert!(!pipeline.is_running());

        // A new click is accepted again
        let again = block_on(pipeline.run(&xlsx(), &presenter));
        assert!(matches!(again, Err(ImportError::SubmitTimeout { .. })));
        assert_eq!(pipeline.submitter.calls.get(), 2);
    }

    #[test]
    fn test_second_invocation_while_running_is_dropped() {
        let pipeline = BulkImportPipeline::new(
            engine_with("docentes", docentes_sheet(&[professor_row(1, "5", "Eva")])),
            FakeSubmitter::replying(ok_results(1)),
        );
        let presenter = RecordingPresenter::default();

        let held = pipeline.in_flight.try_acquire().unwrap();
        let err = block_on(pipeline.run(&xlsx(), &presenter)).unwrap_err();
        assert_eq!(err, ImportError::AlreadyRunning);
        assert!(presenter.events.borrow().is_empty());
        assert_eq!(pipeline.submitter.calls.get(), 0);

        drop(held);
        assert!(block_on(pipeline.run(&xlsx(), &presenter)).is_ok());
    }

    #[test]
    fn test_header_mismatch_stops_before_submit() {
        let mut sheet = docentes_sheet(&[professor_row(1, "5", "Eva")]);
        let mut header = text_row(HEADERS);
        header[7] = CellValue::from("HAE-O");
        sheet.set_row(11, header);
        let pipeline = BulkImportPipeline::new(
            engine_with("docentes", sheet),
            FakeSubmitter::replying(ok_results(1)),
        );
        let presenter = RecordingPresenter::default();

        let err = block_on(pipeline.run(&xlsx(), &presenter)).unwrap_err();

        assert!(matches!(err, ImportError::HeaderMismatch { ref column, .. } if column == "H"));
        assert_eq!(pipeline.submitter.calls.get(), 0);
        assert!(presenter.last_message.borrow().contains("HAE-O"));
    }

    #[test]
    fn test_missing_sheet_and_rejected_file() {
        let pipeline = BulkImportPipeline::new(
            engine_with("Plan1", docentes_sheet(&[professor_row(1, "5", "Eva")])),
            FakeSubmitter::replying(ok_results(1)),
        );
        let presenter = RecordingPresenter::default();

        let err = block_on(pipeline.run(&xlsx(), &presenter)).unwrap_err();
        assert!(matches!(err, ImportError::SheetNotFound { .. }));

        let csv = FakeFile {
            name: "docentes.csv",
            size: 10,
        };
        let err = block_on(pipeline.run(&csv, &presenter)).unwrap_err();
        assert!(matches!(err, ImportError::InputRejected(_)));
        assert_eq!(pipeline.submitter.calls.get(), 0);
    }

    #[test]
    fn test_engine_load_timeout() {
        let mut engine = engine_with("docentes", docentes_sheet(&[professor_row(1, "5", "Eva")]));
        engine.load = Err(ImportError::LoadTimeout { seconds: 10 });
        let pipeline = BulkImportPipeline::new(engine, FakeSubmitter::replying(ok_results(1)));
        let presenter = RecordingPresenter::default();

        let err = block_on(pipeline.run(&xlsx(), &presenter)).unwrap_err();

        assert_eq!(err, ImportError::LoadTimeout { seconds: 10 });
        assert_eq!(pipeline.submitter.calls.get(), 0);
        assert_eq!(presenter.events.borrow().last(), Some(&Event::Busy(false)));
    }

    #[test]
    fn test_row_ceiling_is_reported() {
        let rows: Vec<Vec<CellValue>> = (1..=203)
            .map(|i| professor_row(i, &(1000 + i).to_string(), &format!("Prof {}", i)))
            .collect();
        let pipeline = BulkImportPipeline::new(
            engine_with("docentes", docentes_sheet(&rows)),
            FakeSubmitter::replying(ok_results(200)),
        );
        let presenter = RecordingPresenter::default();

        let report = block_on(pipeline.run(&xlsx(), &presenter)).unwrap();

        assert_eq!(report.submitted, 200);
        assert_eq!(report.rows_beyond_limit, 3);
        assert_eq!(pipeline.submitter.received.borrow().len(), 200);
        assert_eq!(report.summary_notice().severity, Severity::Warning);
        assert!(presenter
            .last_message
            .borrow()
            .contains("3 linha(s) além do limite de 200"));
    }

    #[test]
    fn test_summary_notice_lists_excluded_rows() {
        let report = ImportReport {
            submitted: 2,
            excluded: vec![ExcludedRow {
                row_number: 14,
                reason: super::super::mapping::ExclusionReason::MissingName,
            }],
            rows_beyond_limit: 0,
            response: ImportResponse::Other(serde_json::json!("ok")),
        };
        let notice = report.summary_notice();
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(
            notice.message,
            "Importação concluída: 2 enviado(s).\n1 linha(s) ignorada(s): 14 (nome vazio)"
        );
    }
}
