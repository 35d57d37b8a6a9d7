//! Settings: profile tab, password tab and logout.
//!
//! The backend exposes no profile or password endpoints to the dashboard, so
//! the profile tab edits the display name kept in the local snapshot and the
//! password tab only validates input before pointing at the account service.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SettingsTab {
    #[default]
    Profile,
    Password,
}

fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Please fill in all password fields");
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 8 characters");
    }
    if new != confirm {
        return Err("New passwords do not match");
    }
    if new == current {
        return Err("New password must differ from the current one");
    }
    Ok(())
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(SettingsTab::default());
    let display_name = RwSignal::new(auth.get_untracked().profile().and_then(|p| p.name.clone()).unwrap_or_default());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<(bool, String)>);

    let on_save_profile = move |_| {
        let state = auth.get_untracked();
        let (Some(token), Some(profile)) = (state.session.token.clone(), state.profile().cloned()) else {
            message.set(Some((false, "No active session".to_owned())));
            return;
        };
        let name = display_name.get_untracked().trim().to_owned();
        let updated = access::ProfileSnapshot { name: (!name.is_empty()).then_some(name), ..profile };
        let store = crate::util::credentials::browser_store();
        match store.save(&token, &updated, store.remember_me()) {
            Ok(()) => {
                auth.set(AuthState::loaded(store.load()));
                message.set(Some((true, "Profile saved".to_owned())));
            }
            Err(err) => message.set(Some((false, err.to_string()))),
        }
    };

    let on_update_password = move |_| {
        let result = validate_password_change(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        message.set(Some(match result {
            Ok(()) => (true, "Password changes are completed through the account service".to_owned()),
            Err(e) => (false, e.to_owned()),
        }));
    };

    let tab_button = move |target: SettingsTab, label: &'static str| {
        view! {
            <button
                class="settings__tab"
                class:settings__tab--active=move || tab.get() == target
                on:click=move |_| {
                    tab.set(target);
                    message.set(None);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="settings-page">
            <div class="page-header">
                <h1 class="page-title">"Settings"</h1>
                <button class="btn settings__logout" on:click=move |_| crate::util::auth::logout()>
                    "Logout"
                </button>
            </div>
            <div class="settings__tabs">
                {tab_button(SettingsTab::Profile, "Profile")}
                {tab_button(SettingsTab::Password, "Password")}
            </div>
            <Show when=move || message.get().is_some()>
                <p class=move || {
                    if message.get().is_some_and(|(ok, _)| ok) { "page-notice" } else { "page-error" }
                }>{move || message.get().map(|(_, m)| m).unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || tab.get() == SettingsTab::Profile
                fallback=move || {
                    view! {
                        <div class="panel settings__panel">
                            <label class="dialog__label">
                                "Current password"
                                <input
                                    type="password"
                                    prop:value=move || current_password.get()
                                    on:input=move |ev| current_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "New password"
                                <input
                                    type="password"
                                    prop:value=move || new_password.get()
                                    on:input=move |ev| new_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Confirm new password"
                                <input
                                    type="password"
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" on:click=on_update_password>
                                "Update Password"
                            </button>
                        </div>
                    }
                }
            >
                <div class="panel settings__panel">
                    <label class="dialog__label">
                        "Display name"
                        <input
                            placeholder="Enter your display name"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input type="email" readonly=true prop:value=move || auth.get().email()/>
                    </label>
                    <button class="btn btn--primary" on:click=on_save_profile>
                        "Save"
                    </button>
                </div>
            </Show>
        </div>
    }
}
