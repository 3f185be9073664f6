use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use yew::html::Scope;
use yew::prelude::*;
use shared::TaskScope;

/// Runs `future` for a struct component; the message is dropped if `scope`
/// was cancelled in the meantime.
pub fn spawn_scoped<C, F>(link: &Scope<C>, scope: &mut TaskScope, future: F)
where
    C: Component,
    F: Future<Output = C::Message> + 'static,
{
    let guarded = scope.guard(future);
    link.send_future_batch(async move {
        match guarded.await {
            Ok(msg) => vec![msg],
            Err(_) => Vec::new(),
        }
    });
}

/// A task scope tied to a function component, cancelled on unmount.
#[hook]
pub fn use_task_scope() -> Rc<RefCell<TaskScope>> {
    let scope = use_mut_ref(TaskScope::new);
    {
        let scope = scope.clone();
        use_effect_with_deps(move |_| move || { scope.borrow_mut().cancel(); }, ());
    }
    scope
}

pub fn spawn_in<F>(scope: &Rc<RefCell<TaskScope>>, future: F)
where
    F: Future<Output = ()> + 'static,
{
    let guarded = scope.borrow_mut().guard(future);
    wasm_bindgen_futures::spawn_local(async move {
        let _ = guarded.await;
    });
}

/// Spawns `future` under a fresh scope that an effect cleanup drops, so a
/// response for superseded dependencies is never applied.
pub fn spawn_for_effect<F>(future: F) -> TaskScope
where
    F: Future<Output = ()> + 'static,
{
    let mut scope = TaskScope::new();
    let guarded = scope.guard(future);
    wasm_bindgen_futures::spawn_local(async move {
        let _ = guarded.await;
    });
    scope
}
