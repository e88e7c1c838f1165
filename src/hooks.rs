use std::rc::Rc;

use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::Navigator;
use crate::config::AppConfig;

#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(&AppConfig::default()))
}

#[hook]
pub fn use_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().unwrap_or_default()
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_default()
}

#[derive(Default, PartialEq)]
struct Generation(u32);

impl Reducible for Generation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

/// A counter to list as an effect dependency, and the callback that bumps it
/// to run the effect's fetch again.
#[hook]
pub fn use_reload() -> (u32, Callback<()>) {
    let generation = use_reducer(Generation::default);
    let dispatcher = generation.dispatcher();
    (generation.0, Callback::from(move |_| dispatcher.dispatch(())))
}
