use contracts::domain::a001_professor::{Matricula, Professor, STATUS_ATIVO, STATUS_INATIVO};
use contracts::shared::lenient::parse_int_lenient;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_professor::api;
use crate::shared::notify::Notice;

/// Raw text of every form input
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorForm {
    pub matricula: String,
    pub nome_professor: String,
    pub status_situacao: String,
    pub regime_juridico: String,
    pub carga_horaria: String,
    pub hora_atividade: String,
    pub hae_o: String,
    pub hae_c: String,
    pub obs_manha: String,
    pub obs_tarde: String,
    pub obs_noite: String,
    pub data_inclusao: Option<String>,
}

impl Default for ProfessorForm {
    fn default() -> Self {
        Self {
            matricula: String::new(),
            nome_professor: String::new(),
            status_situacao: STATUS_ATIVO.to_string(),
            regime_juridico: String::new(),
            carga_horaria: String::new(),
            hora_atividade: String::new(),
            hae_o: String::new(),
            hae_c: String::new(),
            obs_manha: String::new(),
            obs_tarde: String::new(),
            obs_noite: String::new(),
            data_inclusao: None,
        }
    }
}

fn optional_int(label: &str, raw: &str) -> Result<Option<i64>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_int_lenient(raw)
        .map(Some)
        .ok_or_else(|| format!("{} deve ser um número inteiro", label))
}

fn int_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ProfessorForm {
    pub fn from_professor(p: &Professor) -> Self {
        Self {
            matricula: p.matricula.to_string(),
            nome_professor: p.nome_professor.clone(),
            status_situacao: p.status_situacao.to_string(),
            regime_juridico: p.regime_juridico.clone(),
            carga_horaria: int_text(p.carga_horaria),
            hora_atividade: int_text(p.hora_atividade),
            hae_o: int_text(p.hae_o),
            hae_c: int_text(p.hae_c),
            obs_manha: p.obs_manha.clone(),
            obs_tarde: p.obs_tarde.clone(),
            obs_noite: p.obs_noite.clone(),
            data_inclusao: p.data_inclusao.clone(),
        }
    }

    pub fn to_professor(&self) -> Result<Professor, String> {
        let matricula = Matricula::parse(&self.matricula).map_err(|e| e.to_string())?;
        let status_situacao = match self.status_situacao.trim() {
            "1" => STATUS_ATIVO,
            "0" => STATUS_INATIVO,
            other => return Err(format!("Situação inválida: \"{}\"", other)),
        };
        let professor = Professor {
            matricula,
            nome_professor: self.nome_professor.trim().to_string(),
            status_situacao,
            regime_juridico: self.regime_juridico.trim().to_string(),
            carga_horaria: optional_int("Carga horária", &self.carga_horaria)?,
            hora_atividade: optional_int("Hora atividade", &self.hora_atividade)?,
            hae_o: optional_int("HAE-o", &self.hae_o)?,
            hae_c: optional_int("HAE-c", &self.hae_c)?,
            obs_manha: self.obs_manha.trim().to_string(),
            obs_tarde: self.obs_tarde.trim().to_string(),
            obs_noite: self.obs_noite.trim().to_string(),
            data_inclusao: None,
        };
        professor.validate()?;
        Ok(professor)
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// ViewModel of the professor form.
///
/// `selected` is the record loaded from the list; it is the target of
/// update and delete until reset.
#[derive(Clone, Copy)]
pub struct ProfessorDetailsViewModel {
    pub form: RwSignal<ProfessorForm>,
    pub selected: RwSignal<Option<Matricula>>,
    pub notice: RwSignal<Option<Notice>>,
    pub saving: RwSignal<bool>,
}

impl ProfessorDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProfessorForm::default()),
            selected: RwSignal::new(None),
            notice: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.selected.get().is_some()
    }

    pub fn reset(&self) {
        self.form.set(ProfessorForm::default());
        self.selected.set(None);
    }

    /// Load the full record of a list row into the form
    pub fn select(&self, matricula: Matricula) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_professor(matricula).await {
                Ok(professor) => {
                    vm.form.set(ProfessorForm::from_professor(&professor));
                    vm.selected.set(Some(matricula));
                    vm.notice.set(None);
                }
                Err(e) => vm
                    .notice
                    .set(Some(Notice::danger(format!("Erro ao carregar: {}", e)))),
            }
        });
    }

    fn validated(&self) -> Option<Professor> {
        match self.form.get_untracked().to_professor() {
            Ok(p) => Some(p),
            Err(e) => {
                self.notice.set(Some(Notice::warning(e)));
                None
            }
        }
    }

    pub fn create_command(&self, on_done: Callback<()>) {
        let Some(professor) = self.validated() else {
            return;
        };
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match api::create_professor(&professor).await {
                Ok(msg) => {
                    vm.reset();
                    vm.notice.set(Some(Notice::success(msg)));
                    on_done.run(());
                }
                Err(e) => vm.notice.set(Some(Notice::danger(e))),
            }
            vm.saving.set(false);
        });
    }

    pub fn update_command(&self, on_done: Callback<()>) {
        let Some(target) = self.selected.get_untracked() else {
            self.notice
                .set(Some(Notice::warning("Selecione um professor na lista")));
            return;
        };
        let Some(mut professor) = self.validated() else {
            return;
        };
        professor.matricula = target;
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match api::update_professor(&professor).await {
                Ok(msg) => {
                    vm.notice.set(Some(Notice::success(msg)));
                    on_done.run(());
                }
                Err(e) => vm.notice.set(Some(Notice::danger(e))),
            }
            vm.saving.set(false);
        });
    }

    pub fn delete_command(&self, on_done: Callback<()>) {
        let Some(target) = self.selected.get_untracked() else {
            self.notice
                .set(Some(Notice::warning("Selecione um professor na lista")));
            return;
        };
        if !confirm(&format!("Excluir o professor de matrícula {}?", target)) {
            return;
        }
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match api::delete_professor(target).await {
                Ok(msg) => {
                    vm.reset();
                    vm.notice.set(Some(Notice::success(msg)));
                    on_done.run(());
                }
                Err(e) => vm.notice.set(Some(Notice::danger(e))),
            }
            vm.saving.set(false);
        });
    }
}

impl Default for ProfessorDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ProfessorForm {
        ProfessorForm {
            matricula: " 1001 ".into(),
            nome_professor: " Ana Silva ".into(),
            carga_horaria: "40".into(),
            hae_o: "2,5".into(),
            ..ProfessorForm::default()
        }
    }

    #[test]
    fn test_form_to_professor() {
        let p = filled().to_professor().unwrap();
        assert_eq!(p.matricula.value(), 1001);
        assert_eq!(p.nome_professor, "Ana Silva");
        assert_eq!(p.status_situacao, STATUS_ATIVO);
        assert_eq!(p.carga_horaria, Some(40));
        assert_eq!(p.hae_o, Some(2));
        assert_eq!(p.hora_atividade, None);
    }

    #[test]
    fn test_form_validation_messages() {
        let mut f = filled();
        f.matricula = "abc".into();
        assert!(f.to_professor().unwrap_err().contains("Matrícula inválida"));

        let mut f = filled();
        f.carga_horaria = "40h".into();
        assert_eq!(
            f.to_professor().unwrap_err(),
            "Carga horária deve ser um número inteiro"
        );

        let mut f = filled();
        f.nome_professor = "  ".into();
        assert!(f.to_professor().is_err());

        let mut f = filled();
        f.status_situacao = "2".into();
        assert!(f.to_professor().is_err());
    }

    #[test]
    fn test_form_round_trip_from_record() {
        let p = filled().to_professor().unwrap();
        let form = ProfessorForm::from_professor(&p);
        assert_eq!(form.matricula, "1001");
        assert_eq!(form.hae_o, "2");
        assert_eq!(form.to_professor().unwrap(), p);
    }
}
