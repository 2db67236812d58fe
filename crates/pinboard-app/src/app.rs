//! Application shell: UI-mode flags, floating controls, demo pages, and the
//! per-frame wiring between the store, the overlay and the host window.

use crate::host::{NativeConfirm, ToastNotifier};
use crate::overlay;
use egui::{Context, RichText};
use kurbo::{Size, Vec2};
use pinboard_core::{ConfigError, PageEnvironment, PinBackend, PinStore, Surface};
use pinboard_widgets::{
    ActionButton, Toasts, ToggleButton, loading_overlay, theme, toolbar_frame,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Pages of the demo host. Pins partition on exact path equality, so each
/// page keeps its own annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoPage {
    Overview,
    Changelog,
}

impl DemoPage {
    const ALL: [DemoPage; 2] = [DemoPage::Overview, DemoPage::Changelog];

    fn path(self) -> &'static str {
        match self {
            DemoPage::Overview => "pinboard-demo://overview",
            DemoPage::Changelog => "pinboard-demo://changelog",
        }
    }

    fn title(self) -> &'static str {
        match self {
            DemoPage::Overview => "Overview",
            DemoPage::Changelog => "Changelog",
        }
    }
}

/// The embeddable widget shell hosted over a scrollable demo page.
pub struct PinboardApp {
    store: PinStore,
    surface: Surface,
    toasts: Rc<RefCell<Toasts>>,
    /// Whether empty-surface clicks open the composer.
    annotation_active: bool,
    /// Whether pin markers render.
    markers_visible: bool,
    /// Whether the full control bar shows, or just the re-expand button.
    controls_expanded: bool,
    page: DemoPage,
    /// Scroll offset of the page content as of the last frame.
    scroll: Vec2,
}

impl PinboardApp {
    /// Build the shell and issue the initial pin load.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        backend: Box<dyn PinBackend>,
        identity: String,
    ) -> Result<Self, ConfigError> {
        let toasts = Rc::new(RefCell::new(Toasts::new()));
        let notifier = ToastNotifier::new(toasts.clone());
        let mut store = PinStore::new(backend, identity, Box::new(notifier))?;

        let page = DemoPage::Overview;
        store.load(page.path());

        Ok(Self {
            store,
            surface: Surface::new(),
            toasts,
            annotation_active: false,
            markers_visible: true,
            controls_expanded: true,
            page,
            scroll: Vec2::ZERO,
        })
    }

    fn switch_page(&mut self, page: DemoPage) {
        if self.page == page {
            return;
        }
        self.page = page;
        self.surface.dismiss_popups();
        // The widget re-reads the current page on every load; switching
        // re-issues it for the new path.
        self.store.load(page.path());
    }

    fn draw_page(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::from_gray(252)))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        page_content(ui, self.page);
                    });
                self.scroll = Vec2::new(
                    output.state.offset.x as f64,
                    output.state.offset.y as f64,
                );
            });
    }

    fn draw_controls(&mut self, ctx: &Context, env: &PageEnvironment) {
        egui::Area::new(egui::Id::new("pinboard-controls"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(12.0, 12.0))
            .show(ctx, |ui| {
                toolbar_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if !self.controls_expanded {
                            if ActionButton::new("Feedback »").show(ui) {
                                self.controls_expanded = true;
                            }
                            return;
                        }

                        let annotate_label = if self.annotation_active {
                            "Disable Feedback"
                        } else {
                            "Enable Feedback"
                        };
                        if ToggleButton::new(annotate_label, self.annotation_active).show(ui) {
                            self.annotation_active = !self.annotation_active;
                        }

                        let markers_label = if self.markers_visible {
                            "Hide Pins"
                        } else {
                            "Show Pins"
                        };
                        if ToggleButton::new(markers_label, self.markers_visible).show(ui) {
                            self.markers_visible = !self.markers_visible;
                        }

                        if ActionButton::new("Remove All Pins").danger().show(ui) {
                            self.store.clear_page(&env.path, &NativeConfirm);
                        }

                        ui.separator();

                        let mut target = None;
                        for page in DemoPage::ALL {
                            if ToggleButton::new(page.title(), self.page == page).show(ui) {
                                target = Some(page);
                            }
                        }
                        if let Some(page) = target {
                            self.switch_page(page);
                        }

                        if ActionButton::new("«").show(ui) {
                            self.controls_expanded = false;
                        }
                    });
                });
            });
    }
}

impl eframe::App for PinboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.store.poll() {
            ctx.request_repaint();
        }

        // Foreground trigger: catch up with the collaborator whenever the
        // window regains focus, never on a timer.
        let focus_regained = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::WindowFocused(true)))
        });
        if focus_regained {
            log::debug!("window focus regained, refreshing pins");
            self.store.reload();
        }

        self.draw_page(ctx);

        let env = PageEnvironment {
            path: self.page.path().to_string(),
            scroll: self.scroll,
            viewport: screen_size(ctx),
        };

        overlay::show(
            ctx,
            &mut self.surface,
            &mut self.store,
            &env,
            self.annotation_active,
            self.markers_visible,
            &NativeConfirm,
        );

        self.draw_controls(ctx, &env);
        self.toasts.borrow_mut().show(ctx);
        loading_overlay(ctx, self.store.is_loading());
    }
}

fn screen_size(ctx: &Context) -> Size {
    let rect = ctx.screen_rect();
    Size::new(rect.width() as f64, rect.height() as f64)
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(18.0);
    ui.label(RichText::new(text).size(22.0).strong().color(theme::TEXT));
    ui.add_space(8.0);
}

fn paragraph(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(14.0).color(theme::TEXT));
    ui.add_space(10.0);
}

fn page_content(ui: &mut egui::Ui, page: DemoPage) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        ui.add_space(48.0);

        match page {
            DemoPage::Overview => {
                heading(ui, "Aurora Analytics");
                paragraph(
                    ui,
                    "Aurora turns raw event streams into dashboards your whole team can \
                     read. Connect a source, pick a template, and share a live view in \
                     minutes - no query language required.",
                );
                paragraph(
                    ui,
                    "Every chart on this page is a live object. Reviewers can leave \
                     positioned feedback anywhere: enable feedback mode from the bar in \
                     the corner, then click the spot you want to annotate.",
                );
                heading(ui, "Sources");
                paragraph(
                    ui,
                    "Streaming connectors cover the usual suspects - Postgres logical \
                     replication, Kafka, Segment, and plain webhooks. Batch imports \
                     accept CSV and Parquet up to 50 GB per file.",
                );
                paragraph(
                    ui,
                    "Schema drift is handled by versioned mappings. When an upstream \
                     field changes type, the affected dashboards flag themselves \
                     instead of silently charting garbage.",
                );
                heading(ui, "Dashboards");
                paragraph(
                    ui,
                    "Layouts are responsive down to tablet widths. Widgets snap to an \
                     8-point grid and inherit the workspace theme; per-widget overrides \
                     exist but are deliberately buried.",
                );
                paragraph(
                    ui,
                    "Alert rules attach to any series. Thresholds, anomaly bands, and \
                     flatline detection ship out of the box, with webhook and email \
                     delivery.",
                );
                heading(ui, "Pricing");
                paragraph(
                    ui,
                    "Free for three editors and one million events a month. The team \
                     plan adds unlimited editors, five-minute refresh, and a year of \
                     history. Enterprise adds SSO, audit logs, and a dedicated region.",
                );
                paragraph(
                    ui,
                    "All plans include the reviewer role: reviewers see dashboards and \
                     leave feedback pins but never edit a widget.",
                );
            }
            DemoPage::Changelog => {
                heading(ui, "Changelog");
                paragraph(
                    ui,
                    "2.4 - Dashboards now refresh in place without losing scroll \
                     position. The export menu grew PDF output with selectable paper \
                     sizes.",
                );
                paragraph(
                    ui,
                    "2.3 - Anomaly bands learned seasonal baselines. Weekly patterns \
                     are detected automatically after fourteen days of data.",
                );
                paragraph(
                    ui,
                    "2.2 - The query inspector shows per-widget cache state and the \
                     exact statement sent to the source, with one-click copy.",
                );
                paragraph(
                    ui,
                    "2.1 - Workspace themes. Dark mode finally applies to embedded \
                     views, and custom accent colors survive exports.",
                );
                paragraph(
                    ui,
                    "2.0 - New rendering engine. Charts with more than 100k points \
                     draw an order of magnitude faster, and tooltips no longer lag on \
                     dense scatter plots.",
                );
                paragraph(
                    ui,
                    "1.9 - Imports accept Parquet. Column statistics preview before \
                     the import commits, catching most type surprises early.",
                );
            }
        }

        ui.add_space(160.0);
    });
}
