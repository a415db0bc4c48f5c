use contracts::system::auth::UserInfo;
use web_sys::window;

const SESSION_KEY: &str = "professores_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn encode_session(user: &UserInfo) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// A corrupted entry reads as "no session"
pub fn decode_session(raw: &str) -> Option<UserInfo> {
    serde_json::from_str(raw).ok()
}

pub fn save_session(user: &UserInfo) {
    let (Some(storage), Some(raw)) = (get_local_storage(), encode_session(user)) else {
        return;
    };
    let _ = storage.set_item(SESSION_KEY, &raw);
}

pub fn load_session() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    let user = decode_session(&raw);
    if user.is_none() {
        log::warn!("Sessão salva inválida; descartando");
        clear_session();
    }
    user
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip_keeps_backend_keys() {
        let user = UserInfo {
            nome_funcionario: "Maria".into(),
            numero_matricula: Some(42),
            codigo_unidade: Some(7),
            email_fatec: "maria@fatec.sp.gov.br".into(),
        };
        let raw = encode_session(&user).unwrap();
        assert!(raw.contains("\"nomeFuncionario\":\"Maria\""));
        assert_eq!(decode_session(&raw), Some(user));
    }

    #[test]
    fn test_corrupted_session() {
        assert_eq!(decode_session("{not json"), None);
        assert_eq!(decode_session(r#"{"nome":"x"}"#), None);
    }
}
