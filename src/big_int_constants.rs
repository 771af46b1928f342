/// One "digit" of the magnitude, base 2^64.
pub type Limb = u64;

pub const LIMB_BITS: usize = Limb::BITS as usize;

pub const HIGH_BIT: Limb = 1 << (LIMB_BITS - 1);

pub const LOW_BIT: Limb = 1;

pub const DIGITS: [char; 16] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f'
];

/// Largest digit value any supported radix can produce.
pub const MAX_CONSTANT: usize = 15;
