//! Hands reducer-emitted [`RuntimeEffect`](crate::reducer::RuntimeEffect) batches to the host.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Subscribes to the effect queue and runs each batch in emission order.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        // Taken up front: a timer or focus effect may dispatch and queue the next batch.
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        let host = runtime.host.get_value();
        batch
            .into_iter()
            .for_each(|effect| host.run_runtime_effect(runtime, effect));
    });
}
