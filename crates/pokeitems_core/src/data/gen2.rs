//! Generation 2 (Gold/Silver/Crystal) item indices.
//!
//! `teruSamaN` entries are the dummy items the games label TERU-SAMA.
//! Entries marked "Crystal only" are TERU-SAMA dummies in Gold/Silver.

use super::ItemDef;

#[rustfmt::skip]
pub(crate) const GEN2_ITEMS: &[ItemDef] = &[
    ItemDef { index:   0, name: "noItem"       },
    ItemDef { index:   1, name: "masterBall"   },
    ItemDef { index:   2, name: "ultraBall"    },
    ItemDef { index:   3, name: "brightpowder" },
    ItemDef { index:   4, name: "greatBall"    },
    ItemDef { index:   5, name: "pokeBall"     },
    ItemDef { index:   6, name: "townMap"      },
    ItemDef { index:   7, name: "bicycle"      },
    ItemDef { index:   8, name: "moonStone"    },
    ItemDef { index:   9, name: "antidote"     },
    ItemDef { index:  10, name: "burnHeal"     },
    ItemDef { index:  11, name: "iceHeal"      },
    ItemDef { index:  12, name: "awakening"    },
    ItemDef { index:  13, name: "parlyzHeal"   },
    ItemDef { index:  14, name: "fullRestore"  },
    ItemDef { index:  15, name: "maxPotion"    },
    ItemDef { index:  16, name: "hyperPotion"  },
    ItemDef { index:  17, name: "superPotion"  },
    ItemDef { index:  18, name: "potion"       },
    ItemDef { index:  19, name: "escapeRope"   },
    ItemDef { index:  20, name: "repel"        },
    ItemDef { index:  21, name: "maxElixer"    },
    ItemDef { index:  22, name: "fireStone"    },
    ItemDef { index:  23, name: "thunderstone" },
    ItemDef { index:  24, name: "waterStone"   },
    ItemDef { index:  25, name: "teruSama25"   },
    ItemDef { index:  26, name: "hpUp"         },
    ItemDef { index:  27, name: "protein"      },
    ItemDef { index:  28, name: "iron"         },
    ItemDef { index:  29, name: "carbos"       },
    ItemDef { index:  30, name: "luckyPunch"   },
    ItemDef { index:  31, name: "calcium"      },
    ItemDef { index:  32, name: "rareCandy"    },
    ItemDef { index:  33, name: "xAccuracy"    },
    ItemDef { index:  34, name: "leafStone"    },
    ItemDef { index:  35, name: "metalPowder"  },
    ItemDef { index:  36, name: "nugget"       },
    ItemDef { index:  37, name: "pokeDoll"     },
    ItemDef { index:  38, name: "fullHeal"     },
    ItemDef { index:  39, name: "revive"       },
    ItemDef { index:  40, name: "maxRevive"    },
    ItemDef { index:  41, name: "guardSpec"    },
    ItemDef { index:  42, name: "superRepel"   },
    ItemDef { index:  43, name: "maxRepel"     },
    ItemDef { index:  44, name: "direHit"      },
    ItemDef { index:  45, name: "teruSama45"   },
    ItemDef { index:  46, name: "freshWater"   },
    ItemDef { index:  47, name: "sodaPop"      },
    ItemDef { index:  48, name: "lemonade"     },
    ItemDef { index:  49, name: "xAttack"      },
    ItemDef { index:  50, name: "teruSama50"   },
    ItemDef { index:  51, name: "xDefend"      },
    ItemDef { index:  52, name: "xSpeed"       },
    ItemDef { index:  53, name: "xSpecial"     },
    ItemDef { index:  54, name: "coinCase"     },
    ItemDef { index:  55, name: "itemfinder"   },
    ItemDef { index:  56, name: "pokeFlute"    },
    ItemDef { index:  57, name: "expShare"     },
    ItemDef { index:  58, name: "oldRod"       },
    ItemDef { index:  59, name: "goodRod"      },
    ItemDef { index:  60, name: "silverLeaf"   },
    ItemDef { index:  61, name: "superRod"     },
    ItemDef { index:  62, name: "ppUp"         },
    ItemDef { index:  63, name: "ether"        },
    ItemDef { index:  64, name: "maxEther"     },
    ItemDef { index:  65, name: "elixer"       },
    ItemDef { index:  66, name: "redScale"     },
    ItemDef { index:  67, name: "secretpotion" },
    ItemDef { index:  68, name: "ssTicket"     },
    ItemDef { index:  69, name: "mysteryEgg"   },
    ItemDef { index:  70, name: "clearBell"    },  // Crystal only
    ItemDef { index:  71, name: "silverWing"   },
    ItemDef { index:  72, name: "moomooMilk"   },
    ItemDef { index:  73, name: "quickClaw"    },
    ItemDef { index:  74, name: "psncureberry" },
    ItemDef { index:  75, name: "goldLeaf"     },
    ItemDef { index:  76, name: "softSand"     },
    ItemDef { index:  77, name: "sharpBeak"    },
    ItemDef { index:  78, name: "przcureberry" },
    ItemDef { index:  79, name: "burntBerry"   },
    ItemDef { index:  80, name: "iceBerry"     },
    ItemDef { index:  81, name: "poisonBarb"   },
    ItemDef { index:  82, name: "kingsRock"    },
    ItemDef { index:  83, name: "bitterBerry"  },
    ItemDef { index:  84, name: "mintBerry"    },
    ItemDef { index:  85, name: "redApricorn"  },
    ItemDef { index:  86, name: "tinymushroom" },
    ItemDef { index:  87, name: "bigMushroom"  },
    ItemDef { index:  88, name: "silverpowder" },
    ItemDef { index:  89, name: "bluApricorn"  },
    ItemDef { index:  90, name: "teruSama90"   },
    ItemDef { index:  91, name: "amuletCoin"   },
    ItemDef { index:  92, name: "ylwApricorn"  },
    ItemDef { index:  93, name: "grnApricorn"  },
    ItemDef { index:  94, name: "cleanseTag"   },
    ItemDef { index:  95, name: "mysticWater"  },
    ItemDef { index:  96, name: "twistedspoon" },
    ItemDef { index:  97, name: "whtApricorn"  },
    ItemDef { index:  98, name: "blackbelt"    },
    ItemDef { index:  99, name: "blkApricorn"  },
    ItemDef { index: 100, name: "teruSama100"  },
    ItemDef { index: 101, name: "pnkApricorn"  },
    ItemDef { index: 102, name: "blackglasses" },
    ItemDef { index: 103, name: "slowpoketail" },
    ItemDef { index: 104, name: "pinkBow"      },
    ItemDef { index: 105, name: "stick"        },
    ItemDef { index: 106, name: "smokeBall"    },
    ItemDef { index: 107, name: "nevermeltice" },
    ItemDef { index: 108, name: "magnet"       },
    ItemDef { index: 109, name: "miracleberry" },
    ItemDef { index: 110, name: "pearl"        },
    ItemDef { index: 111, name: "bigPearl"     },
    ItemDef { index: 112, name: "everstone"    },
    ItemDef { index: 113, name: "spellTag"     },
    ItemDef { index: 114, name: "ragecandybar" },
    ItemDef { index: 115, name: "gsBall"       },  // Crystal only
    ItemDef { index: 116, name: "blueCard"     },  // Crystal only
    ItemDef { index: 117, name: "miracleSeed"  },
    ItemDef { index: 118, name: "thickClub"    },
    ItemDef { index: 119, name: "focusBand"    },
    ItemDef { index: 120, name: "teruSama120"  },
    ItemDef { index: 121, name: "energypowder" },
    ItemDef { index: 122, name: "energyRoot"   },
    ItemDef { index: 123, name: "healPowder"   },
    ItemDef { index: 124, name: "revivalHerb"  },
    ItemDef { index: 125, name: "hardStone"    },
    ItemDef { index: 126, name: "luckyEgg"     },
    ItemDef { index: 127, name: "cardKey"      },
    ItemDef { index: 128, name: "machinePart"  },
    ItemDef { index: 129, name: "eggTicket"    },  // Crystal only
    ItemDef { index: 130, name: "lostItem"     },
    ItemDef { index: 131, name: "stardust"     },
    ItemDef { index: 132, name: "starPiece"    },
    ItemDef { index: 133, name: "basementKey"  },
    ItemDef { index: 134, name: "pass"         },
    ItemDef { index: 135, name: "teruSama135"  },
    ItemDef { index: 136, name: "teruSama136"  },
    ItemDef { index: 137, name: "teruSama137"  },
    ItemDef { index: 138, name: "charcoal"     },
    ItemDef { index: 139, name: "berryJuice"   },
    ItemDef { index: 140, name: "scopeLens"    },
    ItemDef { index: 141, name: "teruSama141"  },
    ItemDef { index: 142, name: "teruSama142"  },
    ItemDef { index: 143, name: "metalCoat"    },
    ItemDef { index: 144, name: "dragonFang"   },
    ItemDef { index: 145, name: "teruSama145"  },
    ItemDef { index: 146, name: "leftovers"    },
    ItemDef { index: 147, name: "teruSama147"  },
    ItemDef { index: 148, name: "teruSama148"  },
    ItemDef { index: 149, name: "teruSama149"  },
    ItemDef { index: 150, name: "mysteryberry" },
    ItemDef { index: 151, name: "dragonScale"  },
    ItemDef { index: 152, name: "berserkGene"  },
    ItemDef { index: 153, name: "teruSama153"  },
    ItemDef { index: 154, name: "teruSama154"  },
    ItemDef { index: 155, name: "teruSama155"  },
    ItemDef { index: 156, name: "sacredAsh"    },
    ItemDef { index: 157, name: "heavyBall"    },
    ItemDef { index: 158, name: "flowerMail"   },
    ItemDef { index: 159, name: "levelBall"    },
    ItemDef { index: 160, name: "lureBall"     },
    ItemDef { index: 161, name: "fastBall"     },
    ItemDef { index: 162, name: "teruSama162"  },
    ItemDef { index: 163, name: "lightBall"    },
    ItemDef { index: 164, name: "friendBall"   },
    ItemDef { index: 165, name: "moonBall"     },
    ItemDef { index: 166, name: "loveBall"     },
    ItemDef { index: 167, name: "normalBox"    },
    ItemDef { index: 168, name: "gorgeousBox"  },
    ItemDef { index: 169, name: "sunStone"     },
    ItemDef { index: 170, name: "polkadotBow"  },
    ItemDef { index: 171, name: "teruSama171"  },
    ItemDef { index: 172, name: "upGrade"      },
    ItemDef { index: 173, name: "berry"        },
    ItemDef { index: 174, name: "goldBerry"    },
    ItemDef { index: 175, name: "squirtbottle" },
    ItemDef { index: 176, name: "teruSama176"  },
    ItemDef { index: 177, name: "parkBall"     },
    ItemDef { index: 178, name: "rainbowWing"  },
    ItemDef { index: 179, name: "teruSama179"  },
    ItemDef { index: 180, name: "brickPiece"   },
    ItemDef { index: 181, name: "surfMail"     },
    ItemDef { index: 182, name: "litebluemail" },
    ItemDef { index: 183, name: "portraitmail" },
    ItemDef { index: 184, name: "lovelyMail"   },
    ItemDef { index: 185, name: "eonMail"      },
    ItemDef { index: 186, name: "morphMail"    },
    ItemDef { index: 187, name: "blueskyMail"  },
    ItemDef { index: 188, name: "musicMail"    },
    ItemDef { index: 189, name: "mirageMail"   },
    ItemDef { index: 190, name: "teruSama190"  },
    ItemDef { index: 191, name: "tm01"         },
    ItemDef { index: 192, name: "tm02"         },
    ItemDef { index: 193, name: "tm03"         },
    ItemDef { index: 194, name: "tm04"         },
    ItemDef { index: 195, name: "teruSama195"  },  // sits between tm04 and tm05
    ItemDef { index: 196, name: "tm05"         },
    ItemDef { index: 197, name: "tm06"         },
    ItemDef { index: 198, name: "tm07"         },
    ItemDef { index: 199, name: "tm08"         },
    ItemDef { index: 200, name: "tm09"         },
    ItemDef { index: 201, name: "tm10"         },
    ItemDef { index: 202, name: "tm11"         },
    ItemDef { index: 203, name: "tm12"         },
    ItemDef { index: 204, name: "tm13"         },
    ItemDef { index: 205, name: "tm14"         },
    ItemDef { index: 206, name: "tm15"         },
    ItemDef { index: 207, name: "tm16"         },
    ItemDef { index: 208, name: "tm17"         },
    ItemDef { index: 209, name: "tm18"         },
    ItemDef { index: 210, name: "tm19"         },
    ItemDef { index: 211, name: "tm20"         },
    ItemDef { index: 212, name: "tm21"         },
    ItemDef { index: 213, name: "tm22"         },
    ItemDef { index: 214, name: "tm23"         },
    ItemDef { index: 215, name: "tm24"         },
    ItemDef { index: 216, name: "tm25"         },
    ItemDef { index: 217, name: "tm26"         },
    ItemDef { index: 218, name: "tm27"         },
    ItemDef { index: 219, name: "tm28"         },
    ItemDef { index: 220, name: "teruSama220"  },  // sits between tm28 and tm29
    ItemDef { index: 221, name: "tm29"         },
    ItemDef { index: 222, name: "tm30"         },
    ItemDef { index: 223, name: "tm31"         },
    ItemDef { index: 224, name: "tm32"         },
    ItemDef { index: 225, name: "tm33"         },
    ItemDef { index: 226, name: "tm34"         },
    ItemDef { index: 227, name: "tm35"         },
    ItemDef { index: 228, name: "tm36"         },
    ItemDef { index: 229, name: "tm37"         },
    ItemDef { index: 230, name: "tm38"         },
    ItemDef { index: 231, name: "tm39"         },
    ItemDef { index: 232, name: "tm40"         },
    ItemDef { index: 233, name: "tm41"         },
    ItemDef { index: 234, name: "tm42"         },
    ItemDef { index: 235, name: "tm43"         },
    ItemDef { index: 236, name: "tm44"         },
    ItemDef { index: 237, name: "tm45"         },
    ItemDef { index: 238, name: "tm46"         },
    ItemDef { index: 239, name: "tm47"         },
    ItemDef { index: 240, name: "tm48"         },
    ItemDef { index: 241, name: "tm49"         },
    ItemDef { index: 242, name: "tm50"         },
    ItemDef { index: 243, name: "hm01"         },
    ItemDef { index: 244, name: "hm02"         },
    ItemDef { index: 245, name: "hm03"         },
    ItemDef { index: 246, name: "hm04"         },
    ItemDef { index: 247, name: "hm05"         },
    ItemDef { index: 248, name: "hm06"         },
    ItemDef { index: 249, name: "hm07"         },
    ItemDef { index: 250, name: "unused250"    },
    ItemDef { index: 251, name: "unused251"    },
    ItemDef { index: 252, name: "unused252"    },
    ItemDef { index: 253, name: "unused253"    },
    ItemDef { index: 254, name: "unused254"    },
    ItemDef { index: 255, name: "unused255"    },
];
