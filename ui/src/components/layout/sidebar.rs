use yew::prelude::*;

use crate::Route;
use crate::hooks::{use_logout, use_push_route};

#[derive(Clone, Debug, PartialEq)]
pub enum SidebarAction {
    Open(Route),
    Logout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarItem {
    pub title: &'static str,
    pub caption: Option<&'static str>,
    pub action: SidebarAction,
    /// Draw a rule above the item.
    pub separator: bool,
}

pub fn admin_items() -> Vec<SidebarItem> {
    vec![
        SidebarItem {
            title: "Dashboard",
            caption: Some("Overview of the site"),
            action: SidebarAction::Open(Route::Admin),
            separator: false,
        },
        SidebarItem {
            title: "Posts",
            caption: Some("Write and manage news posts"),
            action: SidebarAction::Open(Route::AdminPosts),
            separator: false,
        },
        SidebarItem {
            title: "Log out",
            caption: None,
            action: SidebarAction::Logout,
            separator: true,
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Slide-in drawer with the admin navigation.
#[function_component]
pub fn Sidebar(props: &Props) -> Html {
    let push_route = use_push_route();
    let logout = use_logout();

    let on_item = {
        let on_close = props.on_close.clone();
        Callback::from(move |action: SidebarAction| match action {
            SidebarAction::Open(route) => {
                push_route.emit(route);
                on_close.emit(());
            }
            SidebarAction::Logout => logout.emit(()),
        })
    };

    let translate = if props.is_open {
        "translate-x-0"
    } else {
        "-translate-x-full"
    };

    html! {
        <aside
            class={classes!(
                "fixed", "top-0", "left-0", "z-40", "h-full", "w-64",
                "bg-white", "shadow-lg", "transform", "transition-transform",
                translate
            )}
        >
            <button
                onclick={props.on_close.reform(|_: MouseEvent| ())}
                class="absolute top-4 right-4 text-neutral-500 hover:text-neutral-800"
                aria-label="Close menu"
            >
                {"✕"}
            </button>
            <ul class="mt-12">
                {admin_items().into_iter().map(|item| {
                    let onclick = {
                        let on_item = on_item.clone();
                        let action = item.action.clone();
                        Callback::from(move |_: MouseEvent| on_item.emit(action.clone()))
                    };
                    html! {
                        <li class={classes!("p-4", item.separator.then_some("border-t"))}>
                            <button {onclick} class="w-full text-left">
                                <p class="font-semibold text-neutral-900">{item.title}</p>
                                if let Some(caption) = item.caption {
                                    <p class="text-sm text-neutral-500">{caption}</p>
                                }
                            </button>
                        </li>
                    }
                }).collect::<Html>()}
            </ul>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_menu_ends_with_logout() {
        let items = admin_items();
        let routes: Vec<_> = items
            .iter()
            .filter_map(|item| match &item.action {
                SidebarAction::Open(route) => Some(route.clone()),
                SidebarAction::Logout => None,
            })
            .collect();
        assert_eq!(routes, vec![Route::Admin, Route::AdminPosts]);
        assert_eq!(items.last().map(|i| &i.action), Some(&SidebarAction::Logout));
    }
}
