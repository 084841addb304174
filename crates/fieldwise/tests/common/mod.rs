//! Shared record fixtures for the integration suite.
#![allow(dead_code)]

use fieldwise::{Record, TypeDescriptor, TypeDescriptorBuilder, Visibility};
use once_cell::sync::Lazy;

/// Source record: one public, one private-excluded, one reserved field.
pub struct Person {
    pub id: u64,
    pub name: String,
    secret: String,
    __revision: u32,
}

impl Person {
    pub fn new(id: u64, name: String, secret: String) -> Self {
        Self {
            id,
            name,
            secret,
            __revision: 1,
        }
    }
}

static PERSON: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<Person>::new("Person")
        .field::<u64>("id")
        .get(|p| p.id)
        .done()
        .field::<String>("name")
        .get(|p| p.name.clone())
        .done()
        .field::<String>("secret")
        .visibility(Visibility::Private)
        .exclude()
        .get(|p| p.secret.clone())
        .done()
        .field::<u32>("__revision")
        .get(|p| p.__revision)
        .done()
        .build()
});

impl Record for Person {
    fn descriptor() -> &'static TypeDescriptor {
        &PERSON
    }
}

/// Matching target: same-named `id` and `name`, no `secret`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PersonDto {
    pub id: u64,
    pub name: String,
}

static PERSON_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<PersonDto>::new("PersonDto")
        .constructor(PersonDto::default)
        .field::<u64>("id")
        .get(|p| p.id)
        .set(|p, v| p.id = v)
        .mutator(|p, v| p.id = v)
        .done()
        .field::<String>("name")
        .get(|p| p.name.clone())
        .set(|p, v| p.name = v)
        .mutator(|p, v| p.name = v)
        .done()
        .build()
});

impl Record for PersonDto {
    fn descriptor() -> &'static TypeDescriptor {
        &PERSON_DTO
    }
}

/// Source whose excluded field DOES exist on the target, to observe that
/// the target keeps its default.
pub struct Profile {
    pub id: u64,
    pub bio: String,
}

static PROFILE: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<Profile>::new("Profile")
        .field::<u64>("id")
        .get(|p| p.id)
        .done()
        .field::<String>("bio")
        .exclude()
        .get(|p| p.bio.clone())
        .done()
        .build()
});

impl Record for Profile {
    fn descriptor() -> &'static TypeDescriptor {
        &PROFILE
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct ProfileDto {
    pub id: u64,
    pub bio: String,
}

static PROFILE_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<ProfileDto>::new("ProfileDto")
        .constructor(ProfileDto::default)
        .field::<u64>("id")
        .get(|p| p.id)
        .set(|p, v| p.id = v)
        .mutator(|p, v| p.id = v)
        .done()
        .field::<String>("bio")
        .get(|p| p.bio.clone())
        .set(|p, v| p.bio = v)
        .mutator(|p, v| p.bio = v)
        .done()
        .build()
});

impl Record for ProfileDto {
    fn descriptor() -> &'static TypeDescriptor {
        &PROFILE_DTO
    }
}

/// Target with no argument-less constructor registered.
#[derive(Debug)]
pub struct NoCtorDto {
    pub id: u64,
}

static NO_CTOR_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<NoCtorDto>::new("NoCtorDto")
        .field::<u64>("id")
        .set(|d, v| d.id = v)
        .mutator(|d, v| d.id = v)
        .done()
        .build()
});

impl Record for NoCtorDto {
    fn descriptor() -> &'static TypeDescriptor {
        &NO_CTOR_DTO
    }
}

/// Target whose constructor body fails.
#[derive(Debug)]
pub struct ExplodingDto {
    pub id: u64,
}

static EXPLODING_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<ExplodingDto>::new("ExplodingDto")
        .fallible_constructor(|| Err("constructor exploded".into()))
        .field::<u64>("id")
        .mutator(|d, v| d.id = v)
        .done()
        .build()
});

impl Record for ExplodingDto {
    fn descriptor() -> &'static TypeDescriptor {
        &EXPLODING_DTO
    }
}

/// Source/target pair for the setter-not-found scenario: the target has a
/// `count` field and a direct write accessor, but no `set_count` mutator.
pub struct Widget {
    pub count: u32,
}

static WIDGET: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<Widget>::new("Widget")
        .field::<u32>("count")
        .get(|w| w.count)
        .done()
        .build()
});

impl Record for Widget {
    fn descriptor() -> &'static TypeDescriptor {
        &WIDGET
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct WidgetDto {
    pub count: u32,
}

static WIDGET_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<WidgetDto>::new("WidgetDto")
        .constructor(WidgetDto::default)
        .field::<u32>("count")
        .get(|w| w.count)
        .set(|w, v| w.count = v)
        .done()
        .build()
});

impl Record for WidgetDto {
    fn descriptor() -> &'static TypeDescriptor {
        &WIDGET_DTO
    }
}

/// Source for the target-side exclusion scenario; `notes` is unmarked
/// here but marked excluded on the target.
pub struct Note {
    pub id: u64,
    pub notes: String,
}

static NOTE: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<Note>::new("Note")
        .field::<u64>("id")
        .get(|n| n.id)
        .done()
        .field::<String>("notes")
        .get(|n| n.notes.clone())
        .done()
        .build()
});

impl Record for Note {
    fn descriptor() -> &'static TypeDescriptor {
        &NOTE
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SealedNoteDto {
    pub id: u64,
    pub notes: String,
}

static SEALED_NOTE_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<SealedNoteDto>::new("SealedNoteDto")
        .constructor(SealedNoteDto::default)
        .field::<u64>("id")
        .mutator(|d, v| d.id = v)
        .done()
        .field::<String>("notes")
        .exclude()
        .mutator(|d, v| d.notes = v)
        .done()
        .build()
});

impl Record for SealedNoteDto {
    fn descriptor() -> &'static TypeDescriptor {
        &SEALED_NOTE_DTO
    }
}

/// Source with one public and one private field, for the configured
/// visibility-exclusion scenario.
pub struct Account {
    pub open: u64,
    hidden: u64,
}

impl Account {
    pub fn new(open: u64, hidden: u64) -> Self {
        Self { open, hidden }
    }
}

static ACCOUNT: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<Account>::new("Account")
        .field::<u64>("open")
        .get(|a| a.open)
        .done()
        .field::<u64>("hidden")
        .visibility(Visibility::Private)
        .get(|a| a.hidden)
        .done()
        .build()
});

impl Record for Account {
    fn descriptor() -> &'static TypeDescriptor {
        &ACCOUNT
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct AccountDto {
    pub open: u64,
    pub hidden: u64,
}

static ACCOUNT_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<AccountDto>::new("AccountDto")
        .constructor(AccountDto::default)
        .field::<u64>("open")
        .get(|a| a.open)
        .mutator(|a, v| a.open = v)
        .done()
        .field::<u64>("hidden")
        .get(|a| a.hidden)
        .mutator(|a, v| a.hidden = v)
        .done()
        .build()
});

impl Record for AccountDto {
    fn descriptor() -> &'static TypeDescriptor {
        &ACCOUNT_DTO
    }
}

/// Source declaring a field with no read accessor registered.
pub struct Opaque {
    pub id: u64,
}

static OPAQUE: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<Opaque>::new("Opaque")
        .field::<u64>("id")
        .done()
        .build()
});

impl Record for Opaque {
    fn descriptor() -> &'static TypeDescriptor {
        &OPAQUE
    }
}

/// Source with a field the [`PersonDto`] target does not declare.
pub struct Orphan {
    pub id: u64,
    pub extra: u8,
}

static ORPHAN: Lazy<TypeDescriptor> = Lazy::new(|| {
    TypeDescriptorBuilder::<Orphan>::new("Orphan")
        .field::<u64>("id")
        .get(|o| o.id)
        .done()
        .field::<u8>("extra")
        .get(|o| o.extra)
        .done()
        .build()
});

impl Record for Orphan {
    fn descriptor() -> &'static TypeDescriptor {
        &ORPHAN
    }
}
