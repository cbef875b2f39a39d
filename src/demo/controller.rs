use crate::demo::DemoEvent;
use crate::error::MvpError;
use crate::mvp::{AppController, AppHandler, Lifecycle};

/// Switches to the next screen whenever a presenter asks for it.
#[derive(Debug, Default)]
pub struct SwitchHandler;

impl AppHandler<DemoEvent> for SwitchHandler {
    fn receive(
        &self,
        controller: &AppController<DemoEvent>,
        event: &DemoEvent,
    ) -> Result<(), MvpError> {
        match event {
            DemoEvent::Switch => {
                let current = controller.current();
                let next = controller
                    .presenter_names()
                    .into_iter()
                    .find(|name| current.as_deref() != Some(name.as_str()));
                if let Some(next) = next {
                    controller.switch(next);
                }
                Ok(())
            }
        }
    }

    fn on_lifecycle(
        &self,
        controller: &AppController<DemoEvent>,
        stage: Lifecycle,
    ) -> Result<(), MvpError> {
        tracing::info!(%stage, current = ?controller.current(), "demo lifecycle");
        Ok(())
    }
}
