//! Internal routes of the site.

/// A named internal route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Contact,
    PrivacyPolicy,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Contact,
        Route::PrivacyPolicy,
    ];

    /// Root-relative path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/sobre",
            Route::Services => "/servicos",
            Route::Contact => "/contato",
            Route::PrivacyPolicy => "/politica-de-privacidade",
        }
    }

    /// Label used in navigation menus.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Início",
            Route::About => "Sobre",
            Route::Services => "Serviços",
            Route::Contact => "Contato",
            Route::PrivacyPolicy => "Política de Privacidade",
        }
    }

    /// Path without the leading slash; empty for the home page.
    pub fn slug(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}
