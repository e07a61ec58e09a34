//! Static display content for the site.
//!
//! Strings render verbatim. Nothing here carries identity or relationships;
//! the only requirement is matching the published business details exactly.

use crate::components::icons::IconKind;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BUSINESS_NAME: &str = "Samim Services";
pub const PHONE: &str = "123-456-7890";
pub const EMAIL: &str = "help@samimservices.com";
pub const ADDRESS: &str = "123 Main Street, City, Country";
pub const COPYRIGHT: &str = "© 2024 Samim Services. All rights reserved.";

/// One offering card in the services grid.
#[derive(Clone, Copy, Debug)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        title: "Form Filling",
        description: "We help you fill out important forms correctly and quickly.",
        icon: IconKind::ClipboardList,
    },
    ServiceOffering {
        title: "Document Translation",
        description: "We translate your documents to help you understand them better.",
        icon: IconKind::DocumentText,
    },
    ServiceOffering {
        title: "Phone Call Assistance",
        description: "We help you make important phone calls and explain things clearly.",
        icon: IconKind::Phone,
    },
];

/// How a contact method is actioned when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
    Address,
}

/// One card in the contact section.
#[derive(Clone, Copy, Debug)]
pub struct ContactMethod {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
    pub icon: IconKind,
}

impl ContactMethod {
    /// Outbound URI for the method. Street addresses are plain text.
    #[must_use]
    pub fn href(&self) -> Option<String> {
        match self.kind {
            ContactKind::Phone => Some(format!("tel:{}", self.value)),
            ContactKind::Email => Some(format!("mailto:{}", self.value)),
            ContactKind::Address => None,
        }
    }
}

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod { kind: ContactKind::Phone, label: "Phone", value: PHONE, icon: IconKind::Phone },
    ContactMethod { kind: ContactKind::Email, label: "Email", value: EMAIL, icon: IconKind::Envelope },
    ContactMethod { kind: ContactKind::Address, label: "Address", value: ADDRESS, icon: IconKind::MapPin },
];
