use crate::{Route, State};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

/// Clears the session flag and returns to the login page.
#[hook]
pub fn use_logout() -> Callback<()> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        dispatch.reduce_mut(|state| state.logout());
        tracing::info!("logged out");
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
