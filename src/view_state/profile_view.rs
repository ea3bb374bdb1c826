//! Farm profile screen state

use crate::models::profile::{
    new_device, new_field, seed_devices, seed_fields, Device, DeviceKind, FarmerProfile, Field,
    FIELD_CROPS,
};
use crate::widgets::{InputBox, InputKind};

/// Add-field form. Focus 0 = name, 1 = area, 2 = crop.
#[derive(Debug, Clone, Default)]
pub struct FieldForm {
    pub name: InputBox,
    pub area: InputBox,
    /// Index into [`FIELD_CROPS`]; `None` until chosen
    pub crop: Option<usize>,
    pub focus: usize,
}

/// Add-device form. Focus 0 = name, 1 = type.
#[derive(Debug, Clone, Default)]
pub struct DeviceForm {
    pub name: InputBox,
    /// Index into [`DeviceKind::ALL`]; `None` until chosen
    pub kind: Option<usize>,
    pub focus: usize,
}

#[derive(Debug, Clone)]
pub enum ProfileForm {
    Field(FieldForm),
    Device(DeviceForm),
}

impl ProfileForm {
    pub fn new_field() -> Self {
        ProfileForm::Field(FieldForm {
            area: InputBox::new().with_kind(InputKind::Decimal).with_max_chars(8),
            ..FieldForm::default()
        })
    }

    pub fn new_device() -> Self {
        ProfileForm::Device(DeviceForm::default())
    }

    fn focus_count(&self) -> usize {
        match self {
            ProfileForm::Field(_) => 3,
            ProfileForm::Device(_) => 2,
        }
    }

    fn focus_mut(&mut self) -> &mut usize {
        match self {
            ProfileForm::Field(form) => &mut form.focus,
            ProfileForm::Device(form) => &mut form.focus,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_count();
        let focus = self.focus_mut();
        *focus = (*focus + 1) % count;
    }

    pub fn focus_prev(&mut self) {
        let count = self.focus_count();
        let focus = self.focus_mut();
        *focus = (*focus + count - 1) % count;
    }

    /// The text input under focus, if the focus is on one.
    pub fn focused_input(&mut self) -> Option<&mut InputBox> {
        match self {
            ProfileForm::Field(form) => match form.focus {
                0 => Some(&mut form.name),
                1 => Some(&mut form.area),
                _ => None,
            },
            ProfileForm::Device(form) => match form.focus {
                0 => Some(&mut form.name),
                _ => None,
            },
        }
    }

    /// Cycle the option picker under focus by `delta`.
    pub fn cycle_choice(&mut self, delta: isize) {
        match self {
            ProfileForm::Field(form) if form.focus == 2 => {
                form.crop = Some(cycle(form.crop, delta, FIELD_CROPS.len()));
            }
            ProfileForm::Device(form) if form.focus == 1 => {
                form.kind = Some(cycle(form.kind, delta, DeviceKind::ALL.len()));
            }
            _ => {}
        }
    }
}

fn cycle(current: Option<usize>, delta: isize, len: usize) -> usize {
    match current {
        None => {
            if delta < 0 {
                len - 1
            } else {
                0
            }
        }
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
    }
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: FarmerProfile,
    pub fields: Vec<Field>,
    pub devices: Vec<Device>,
    pub form: Option<ProfileForm>,
}

impl ProfileView {
    pub fn new(profile: FarmerProfile) -> Self {
        Self {
            profile,
            fields: seed_fields(),
            devices: seed_devices(),
            form: None,
        }
    }

    pub fn online_devices(&self) -> usize {
        self.devices.iter().filter(|d| d.online).count()
    }

    /// Submit the open form. The form stays open when its input is incomplete.
    pub fn submit_form(&mut self) -> bool {
        let added = match &self.form {
            Some(ProfileForm::Field(form)) => form
                .crop
                .and_then(|crop| new_field(form.name.content(), form.area.content(), FIELD_CROPS[crop]))
                .map(|field| self.fields.push(field))
                .is_some(),
            Some(ProfileForm::Device(form)) => form
                .kind
                .and_then(|kind| new_device(form.name.content(), DeviceKind::ALL[kind]))
                .map(|device| self.devices.push(device))
                .is_some(),
            None => false,
        };
        if added {
            self.form = None;
        }
        added
    }
}
