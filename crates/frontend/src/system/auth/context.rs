use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user_info.is_some()
    }
}

/// Auth context provider component. The session is restored from
/// localStorage before the first render.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        user_info: storage::load_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub async fn do_login(
    email: String,
    senha: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let user = api::login(email, senha).await?;
    log::info!("Login: {}", user.email_fatec);
    storage::save_session(&user);
    set_auth_state.set(AuthState {
        user_info: Some(user),
    });
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    log::info!("Logout");
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
