use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_professor::api::HttpBatchSubmitter;
use crate::domain::a001_professor::import::{BulkImportPipeline, ImportPresenter, ImportReport};
use crate::shared::config::config;
use crate::shared::excel_importer::file_gate::check_file;
use crate::shared::excel_importer::sheetjs::{BrowserFile, SheetJsEngine};
use crate::shared::notify::Notice;

type ProfessorPipeline = BulkImportPipeline<SheetJsEngine, HttpBatchSubmitter>;

/// State of the bulk-import page. The pipeline is created once per page,
/// so its in-flight flag spans every click on "Processar".
#[derive(Clone, Copy)]
pub struct BulkImportViewModel {
    pub busy: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    pub report: RwSignal<Option<ImportReport>>,
    pub file_info: RwSignal<Option<String>>,
    /// True when the selected file passed the extension and size gate
    pub accepted: RwSignal<bool>,
    /// Bumped to clear the native file input
    pub reset_token: RwSignal<u32>,
    pipeline: StoredValue<ProfessorPipeline>,
}

impl BulkImportViewModel {
    pub fn new() -> Self {
        let engine = SheetJsEngine::new(config().sheetjs_url.clone());
        Self {
            busy: RwSignal::new(false),
            notice: RwSignal::new(None),
            report: RwSignal::new(None),
            file_info: RwSignal::new(None),
            accepted: RwSignal::new(false),
            reset_token: RwSignal::new(0),
            pipeline: StoredValue::new(BulkImportPipeline::new(engine, HttpBatchSubmitter::new())),
        }
    }

    pub fn can_process(&self) -> bool {
        self.accepted.get() && !self.busy.get()
    }

    /// Gate the picked file right away so the user sees the problem before processing
    pub fn select_file(&self, file: Option<&web_sys::File>) {
        self.report.set(None);
        let Some(file) = file else {
            self.file_info.set(None);
            self.accepted.set(false);
            self.notice.set(None);
            return;
        };
        match check_file(&file.name(), file.size() as u64) {
            Ok(info) => {
                self.file_info.set(Some(info));
                self.accepted.set(true);
                self.notice.set(None);
            }
            Err(e) => {
                self.file_info.set(None);
                self.accepted.set(false);
                self.notice.set(Some(e.to_notice()));
            }
        }
    }

    pub fn clear(&self) {
        self.file_info.set(None);
        self.accepted.set(false);
        self.report.set(None);
        self.reset_token.update(|t| *t = t.wrapping_add(1));
        self.notice
            .set(Some(Notice::secondary("Seleção limpa. Escolha outra planilha.")));
    }

    pub fn process(&self, file: Option<web_sys::File>) {
        let Some(file) = file else {
            self.notice
                .set(Some(Notice::warning("Selecione uma planilha antes de processar.")));
            return;
        };
        let vm = *self;
        let pipeline = self.pipeline.get_value();
        vm.report.set(None);
        spawn_local(async move {
            // outcome already reported through the presenter
            let _ = pipeline.run(&BrowserFile(file), &vm).await;
        });
    }
}

impl Default for BulkImportViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportPresenter for BulkImportViewModel {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
        if busy {
            self.notice
                .set(Some(Notice::info("Processando planilha, aguarde...")));
        }
    }

    fn notify(&self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    fn show_report(&self, report: &ImportReport) {
        self.report.set(Some(report.clone()));
    }
}
