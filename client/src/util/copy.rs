//! User-facing copy per locale.

use crate::state::config::Locale;

/// Every string the viewer renders.
#[derive(Debug)]
pub struct Catalog {
    pub chats_heading: &'static str,
    pub loading_chats: &'static str,
    pub no_chats: &'static str,
    pub no_company: &'static str,
    pub list_access_blocked: &'static str,
    pub list_generic_error: &'static str,
    pub loading_detail: &'static str,
    pub detail_access_blocked: &'static str,
    pub detail_generic_error: &'static str,
    pub select_chat_prompt: &'static str,
    pub chat_with: &'static str,
    pub company_label: &'static str,
    pub company_phone_label: &'static str,
    pub no_messages: &'static str,
    pub compose_placeholder: &'static str,
    pub send_label: &'static str,
    pub retry_label: &'static str,
}

pub static EN: Catalog = Catalog {
    chats_heading: "Chats",
    loading_chats: "Loading chats...",
    no_chats: "No chats available",
    no_company: "No company selected",
    list_access_blocked: "CORS error: Unable to access the chat server. Please contact support.",
    list_generic_error: "Failed to load chats. Please try again later.",
    loading_detail: "Loading chat details...",
    detail_access_blocked: "CORS error: Unable to access the chat server. Please contact support.",
    detail_generic_error: "Failed to load chat details. Please try again later.",
    select_chat_prompt: "Select a chat to view its details",
    chat_with: "Chat with",
    company_label: "Company:",
    company_phone_label: "Company Phone:",
    no_messages: "No messages in this chat",
    compose_placeholder: "Type a message...",
    send_label: "Send",
    retry_label: "Retry",
};

pub static ES: Catalog = Catalog {
    chats_heading: "Chats",
    loading_chats: "Cargando chats...",
    no_chats: "No hay chats disponibles",
    no_company: "No se ha indicado ninguna empresa",
    list_access_blocked: "Error de CORS: no se puede acceder al servidor de chats. Contacta con soporte.",
    list_generic_error: "No se pudieron cargar los chats. Inténtalo de nuevo más tarde.",
    loading_detail: "Cargando detalles del chat...",
    detail_access_blocked: "Error de CORS: no se puede acceder al servidor de chats. Contacta con soporte.",
    detail_generic_error: "No se pudieron cargar los detalles del chat. Inténtalo de nuevo más tarde.",
    select_chat_prompt: "Selecciona un chat para ver los detalles",
    chat_with: "Chat con",
    company_label: "Empresa:",
    company_phone_label: "Teléfono de la empresa:",
    no_messages: "No hay mensajes en este chat",
    compose_placeholder: "Escribe un mensaje...",
    send_label: "Enviar",
    retry_label: "Reintentar",
};

#[must_use]
pub fn catalog(locale: Locale) -> &'static Catalog {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
    }
}
