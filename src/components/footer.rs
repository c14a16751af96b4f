use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}. All rights reserved.", year, config::OWNER_NAME)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #16151A;
                    color: #878787;
                    text-align: center;
                    padding: 1.5rem;
                    margin-top: 3rem;
                    border-top: 1px solid #262626;
                }
                "#}
            </style>
        </footer>
    }
}
