//! CLDR `windowsZones.xml` mapping between Windows zone names and IANA ids.

use super::windows_zones::WindowsZoneEntry;

pub(crate) static WINDOWS_ZONES: &[WindowsZoneEntry] = &[
    // (UTC-12:00) International Date Line West
    entry("Dateline Standard Time", "001", "Etc/GMT+12"),
    entry("Dateline Standard Time", "ZZ", "Etc/GMT+12"),
    // (UTC-11:00) Coordinated Universal Time-11
    entry("UTC-11", "001", "Etc/GMT+11"),
    entry("UTC-11", "AS", "Pacific/Pago_Pago"),
    entry("UTC-11", "NU", "Pacific/Niue"),
    entry("UTC-11", "UM", "Pacific/Midway"),
    entry("UTC-11", "ZZ", "Etc/GMT+11"),
    // (UTC-10:00) Hawaii
    entry("Hawaiian Standard Time", "001", "Pacific/Honolulu"),
    entry("Hawaiian Standard Time", "CK", "Pacific/Rarotonga"),
    entry("Hawaiian Standard Time", "PF", "Pacific/Tahiti"),
    entry("Hawaiian Standard Time", "UM", "Pacific/Johnston"),
    entry("Hawaiian Standard Time", "US", "Pacific/Honolulu"),
    entry("Hawaiian Standard Time", "ZZ", "Etc/GMT+10"),
    // (UTC-09:00) Alaska
    entry("Alaskan Standard Time", "001", "America/Anchorage"),
    entry("Alaskan Standard Time", "US", "America/Anchorage America/Juneau America/Nome America/Sitka America/Yakutat"),
    // (UTC-08:00) Baja California
    entry("Pacific Standard Time (Mexico)", "001", "America/Santa_Isabel"),
    entry("Pacific Standard Time (Mexico)", "MX", "America/Santa_Isabel"),
    // (UTC-08:00) Pacific Time (US & Canada)
    entry("Pacific Standard Time", "001", "America/Los_Angeles"),
    entry("Pacific Standard Time", "CA", "America/Vancouver America/Dawson America/Whitehorse"),
    entry("Pacific Standard Time", "MX", "America/Tijuana"),
    entry("Pacific Standard Time", "US", "America/Los_Angeles"),
    entry("Pacific Standard Time", "ZZ", "PST8PDT"),
    // (UTC-07:00) Arizona
    entry("US Mountain Standard Time", "001", "America/Phoenix"),
    entry("US Mountain Standard Time", "CA", "America/Dawson_Creek America/Creston"),
    entry("US Mountain Standard Time", "MX", "America/Hermosillo"),
    entry("US Mountain Standard Time", "US", "America/Phoenix"),
    entry("US Mountain Standard Time", "ZZ", "Etc/GMT+7"),
    // (UTC-07:00) Chihuahua, La Paz, Mazatlan
    entry("Mountain Standard Time (Mexico)", "001", "America/Chihuahua"),
    entry("Mountain Standard Time (Mexico)", "MX", "America/Chihuahua America/Mazatlan"),
    // (UTC-07:00) Mountain Time (US & Canada)
    entry("Mountain Standard Time", "001", "America/Denver"),
    entry("Mountain Standard Time", "CA", "America/Edmonton America/Cambridge_Bay America/Inuvik America/Yellowknife"),
    entry("Mountain Standard Time", "MX", "America/Ojinaga"),
    entry("Mountain Standard Time", "US", "America/Denver America/Boise America/Shiprock"),
    entry("Mountain Standard Time", "ZZ", "MST7MDT"),
    // (UTC-06:00) Central America
    entry("Central America Standard Time", "001", "America/Guatemala"),
    entry("Central America Standard Time", "BZ", "America/Belize"),
    entry("Central America Standard Time", "CR", "America/Costa_Rica"),
    entry("Central America Standard Time", "EC", "Pacific/Galapagos"),
    entry("Central America Standard Time", "GT", "America/Guatemala"),
    entry("Central America Standard Time", "HN", "America/Tegucigalpa"),
    entry("Central America Standard Time", "NI", "America/Managua"),
    entry("Central America Standard Time", "SV", "America/El_Salvador"),
    entry("Central America Standard Time", "ZZ", "Etc/GMT+6"),
    // (UTC-06:00) Central Time (US & Canada)
    entry("Central Standard Time", "001", "America/Chicago"),
    entry("Central Standard Time", "CA", "America/Winnipeg America/Rainy_River America/Rankin_Inlet America/Resolute"),
    entry("Central Standard Time", "MX", "America/Matamoros"),
    entry("Central Standard Time", "US", "America/Chicago America/Indiana/Knox America/Indiana/Tell_City America/Menominee America/North_Dakota/Beulah America/North_Dakota/Center America/North_Dakota/New_Salem"),
    entry("Central Standard Time", "ZZ", "CST6CDT"),
    // (UTC-06:00) Guadalajara, Mexico City, Monterrey
    entry("Central Standard Time (Mexico)", "001", "America/Mexico_City"),
    entry("Central Standard Time (Mexico)", "MX", "America/Mexico_City America/Bahia_Banderas America/Cancun America/Merida America/Monterrey"),
    // (UTC-06:00) Saskatchewan
    entry("Canada Central Standard Time", "001", "America/Regina"),
    entry("Canada Central Standard Time", "CA", "America/Regina America/Swift_Current"),
    // (UTC-05:00) Bogota, Lima, Quito
    entry("SA Pacific Standard Time", "001", "America/Bogota"),
    entry("SA Pacific Standard Time", "CA", "America/Coral_Harbour"),
    entry("SA Pacific Standard Time", "CO", "America/Bogota"),
    entry("SA Pacific Standard Time", "EC", "America/Guayaquil"),
    entry("SA Pacific Standard Time", "JM", "America/Jamaica"),
    entry("SA Pacific Standard Time", "KY", "America/Cayman"),
    entry("SA Pacific Standard Time", "PA", "America/Panama"),
    entry("SA Pacific Standard Time", "PE", "America/Lima"),
    entry("SA Pacific Standard Time", "ZZ", "Etc/GMT+5"),
    // (UTC-05:00) Eastern Time (US & Canada)
    entry("Eastern Standard Time", "001", "America/New_York"),
    entry("Eastern Standard Time", "BS", "America/Nassau"),
    entry("Eastern Standard Time", "CA", "America/Toronto America/Iqaluit America/Montreal America/Nipigon America/Pangnirtung America/Thunder_Bay"),
    entry("Eastern Standard Time", "CU", "America/Havana"),
    entry("Eastern Standard Time", "HT", "America/Port-au-Prince"),
    entry("Eastern Standard Time", "TC", "America/Grand_Turk"),
    entry("Eastern Standard Time", "US", "America/New_York America/Detroit America/Indiana/Petersburg America/Indiana/Vincennes America/Indiana/Winamac America/Kentucky/Monticello America/Louisville"),
    entry("Eastern Standard Time", "ZZ", "EST5EDT"),
    // (UTC-05:00) Indiana (East)
    entry("US Eastern Standard Time", "001", "America/Indianapolis"),
    entry("US Eastern Standard Time", "US", "America/Indianapolis America/Indiana/Marengo America/Indiana/Vevay"),
    // (UTC-04:30) Caracas
    entry("Venezuela Standard Time", "001", "America/Caracas"),
    entry("Venezuela Standard Time", "VE", "America/Caracas"),
    // (UTC-04:00) Asuncion
    entry("Paraguay Standard Time", "001", "America/Asuncion"),
    entry("Paraguay Standard Time", "PY", "America/Asuncion"),
    // (UTC-04:00) Atlantic Time (Canada)
    entry("Atlantic Standard Time", "001", "America/Halifax"),
    entry("Atlantic Standard Time", "BM", "Atlantic/Bermuda"),
    entry("Atlantic Standard Time", "CA", "America/Halifax America/Glace_Bay America/Goose_Bay America/Moncton"),
    entry("Atlantic Standard Time", "GL", "America/Thule"),
    // (UTC-04:00) Cuiaba
    entry("Central Brazilian Standard Time", "001", "America/Cuiaba"),
    entry("Central Brazilian Standard Time", "BR", "America/Cuiaba America/Campo_Grande"),
    // (UTC-04:00) Georgetown, La Paz, Manaus, San Juan
    entry("SA Western Standard Time", "001", "America/La_Paz"),
    entry("SA Western Standard Time", "AG", "America/Antigua"),
    entry("SA Western Standard Time", "AI", "America/Anguilla"),
    entry("SA Western Standard Time", "AW", "America/Aruba"),
    entry("SA Western Standard Time", "BB", "America/Barbados"),
    entry("SA Western Standard Time", "BL", "America/St_Barthelemy"),
    entry("SA Western Standard Time", "BO", "America/La_Paz"),
    entry("SA Western Standard Time", "BQ", "America/Kralendijk"),
    entry("SA Western Standard Time", "BR", "America/Manaus America/Boa_Vista America/Eirunepe America/Porto_Velho America/Rio_Branco"),
    entry("SA Western Standard Time", "CA", "America/Blanc-Sablon"),
    entry("SA Western Standard Time", "CW", "America/Curacao"),
    entry("SA Western Standard Time", "DM", "America/Dominica"),
    entry("SA Western Standard Time", "DO", "America/Santo_Domingo"),
    entry("SA Western Standard Time", "GD", "America/Grenada"),
    entry("SA Western Standard Time", "GP", "America/Guadeloupe"),
    entry("SA Western Standard Time", "GY", "America/Guyana"),
    entry("SA Western Standard Time", "KN", "America/St_Kitts"),
    entry("SA Western Standard Time", "LC", "America/St_Lucia"),
    entry("SA Western Standard Time", "MF", "America/Marigot"),
    entry("SA Western Standard Time", "MQ", "America/Martinique"),
    entry("SA Western Standard Time", "MS", "America/Montserrat"),
    entry("SA Western Standard Time", "PR", "America/Puerto_Rico"),
    entry("SA Western Standard Time", "SX", "America/Lower_Princes"),
    entry("SA Western Standard Time", "TT", "America/Port_of_Spain"),
    entry("SA Western Standard Time", "VC", "America/St_Vincent"),
    entry("SA Western Standard Time", "VG", "America/Tortola"),
    entry("SA Western Standard Time", "VI", "America/St_Thomas"),
    entry("SA Western Standard Time", "ZZ", "Etc/GMT+4"),
    // (UTC-04:00) Santiago
    entry("Pacific SA Standard Time", "001", "America/Santiago"),
    entry("Pacific SA Standard Time", "AQ", "Antarctica/Palmer"),
    entry("Pacific SA Standard Time", "CL", "America/Santiago"),
    // (UTC-03:30) Newfoundland
    entry("Newfoundland Standard Time", "001", "America/St_Johns"),
    entry("Newfoundland Standard Time", "CA", "America/St_Johns"),
    // (UTC-03:00) Brasilia
    entry("E. South America Standard Time", "001", "America/Sao_Paulo"),
    entry("E. South America Standard Time", "BR", "America/Sao_Paulo America/Araguaina"),
    // (UTC-03:00) Buenos Aires
    entry("Argentina Standard Time", "001", "America/Buenos_Aires"),
    entry("Argentina Standard Time", "AR", "America/Buenos_Aires America/Argentina/La_Rioja America/Argentina/Rio_Gallegos America/Argentina/Salta America/Argentina/San_Juan America/Argentina/San_Luis America/Argentina/Tucuman America/Argentina/Ushuaia America/Catamarca America/Cordoba America/Jujuy America/Mendoza"),
    // (UTC-03:00) Cayenne, Fortaleza
    entry("SA Eastern Standard Time", "001", "America/Cayenne"),
    entry("SA Eastern Standard Time", "AQ", "Antarctica/Rothera"),
    entry("SA Eastern Standard Time", "BR", "America/Fortaleza America/Belem America/Maceio America/Recife America/Santarem"),
    entry("SA Eastern Standard Time", "FK", "Atlantic/Stanley"),
    entry("SA Eastern Standard Time", "GF", "America/Cayenne"),
    entry("SA Eastern Standard Time", "SR", "America/Paramaribo"),
    entry("SA Eastern Standard Time", "ZZ", "Etc/GMT+3"),
    // (UTC-03:00) Greenland
    entry("Greenland Standard Time", "001", "America/Godthab"),
    entry("Greenland Standard Time", "GL", "America/Godthab"),
    // (UTC-03:00) Montevideo
    entry("Montevideo Standard Time", "001", "America/Montevideo"),
    entry("Montevideo Standard Time", "UY", "America/Montevideo"),
    // (UTC-03:00) Salvador
    entry("Bahia Standard Time", "001", "America/Bahia"),
    entry("Bahia Standard Time", "BR", "America/Bahia"),
    // (UTC-02:00) Coordinated Universal Time-02
    entry("UTC-02", "001", "Etc/GMT+2"),
    entry("UTC-02", "BR", "America/Noronha"),
    entry("UTC-02", "GS", "Atlantic/South_Georgia"),
    entry("UTC-02", "ZZ", "Etc/GMT+2"),
    // (UTC-02:00) Mid-Atlantic
    // Unmappable
    // (UTC-01:00) Azores
    entry("Azores Standard Time", "001", "Atlantic/Azores"),
    entry("Azores Standard Time", "GL", "America/Scoresbysund"),
    entry("Azores Standard Time", "PT", "Atlantic/Azores"),
    // (UTC-01:00) Cape Verde Is.
    entry("Cape Verde Standard Time", "001", "Atlantic/Cape_Verde"),
    entry("Cape Verde Standard Time", "CV", "Atlantic/Cape_Verde"),
    entry("Cape Verde Standard Time", "ZZ", "Etc/GMT+1"),
    // (UTC) Casablanca
    entry("Morocco Standard Time", "001", "Africa/Casablanca"),
    entry("Morocco Standard Time", "MA", "Africa/Casablanca"),
    // (UTC) Coordinated Universal Time
    entry("UTC", "001", "Etc/GMT"),
    entry("UTC", "GL", "America/Danmarkshavn"),
    entry("UTC", "ZZ", "Etc/GMT"),
    // (UTC) Dublin, Edinburgh, Lisbon, London
    entry("GMT Standard Time", "001", "Europe/London"),
    entry("GMT Standard Time", "ES", "Atlantic/Canary"),
    entry("GMT Standard Time", "FO", "Atlantic/Faeroe"),
    entry("GMT Standard Time", "GB", "Europe/London"),
    entry("GMT Standard Time", "GG", "Europe/Guernsey"),
    entry("GMT Standard Time", "IE", "Europe/Dublin"),
    entry("GMT Standard Time", "IM", "Europe/Isle_of_Man"),
    entry("GMT Standard Time", "JE", "Europe/Jersey"),
    entry("GMT Standard Time", "PT", "Europe/Lisbon Atlantic/Madeira"),
    // (UTC) Monrovia, Reykjavik
    entry("Greenwich Standard Time", "001", "Atlantic/Reykjavik"),
    entry("Greenwich Standard Time", "BF", "Africa/Ouagadougou"),
    entry("Greenwich Standard Time", "CI", "Africa/Abidjan"),
    entry("Greenwich Standard Time", "EH", "Africa/El_Aaiun"),
    entry("Greenwich Standard Time", "GH", "Africa/Accra"),
    entry("Greenwich Standard Time", "GM", "Africa/Banjul"),
    entry("Greenwich Standard Time", "GN", "Africa/Conakry"),
    entry("Greenwich Standard Time", "GW", "Africa/Bissau"),
    entry("Greenwich Standard Time", "IS", "Atlantic/Reykjavik"),
    entry("Greenwich Standard Time", "LR", "Africa/Monrovia"),
    entry("Greenwich Standard Time", "ML", "Africa/Bamako"),
    entry("Greenwich Standard Time", "MR", "Africa/Nouakchott"),
    entry("Greenwich Standard Time", "SH", "Atlantic/St_Helena"),
    entry("Greenwich Standard Time", "SL", "Africa/Freetown"),
    entry("Greenwich Standard Time", "SN", "Africa/Dakar"),
    entry("Greenwich Standard Time", "ST", "Africa/Sao_Tome"),
    entry("Greenwich Standard Time", "TG", "Africa/Lome"),
    // (UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna
    entry("W. Europe Standard Time", "001", "Europe/Berlin"),
    entry("W. Europe Standard Time", "AD", "Europe/Andorra"),
    entry("W. Europe Standard Time", "AT", "Europe/Vienna"),
    entry("W. Europe Standard Time", "CH", "Europe/Zurich"),
    entry("W. Europe Standard Time", "DE", "Europe/Berlin Europe/Busingen"),
    entry("W. Europe Standard Time", "GI", "Europe/Gibraltar"),
    entry("W. Europe Standard Time", "IT", "Europe/Rome"),
    entry("W. Europe Standard Time", "LI", "Europe/Vaduz"),
    entry("W. Europe Standard Time", "LU", "Europe/Luxembourg"),
    entry("W. Europe Standard Time", "MC", "Europe/Monaco"),
    entry("W. Europe Standard Time", "MT", "Europe/Malta"),
    entry("W. Europe Standard Time", "NL", "Europe/Amsterdam"),
    entry("W. Europe Standard Time", "NO", "Europe/Oslo"),
    entry("W. Europe Standard Time", "SE", "Europe/Stockholm"),
    entry("W. Europe Standard Time", "SJ", "Arctic/Longyearbyen"),
    entry("W. Europe Standard Time", "SM", "Europe/San_Marino"),
    entry("W. Europe Standard Time", "VA", "Europe/Vatican"),
    //(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague
    entry("Central Europe Standard Time", "001", "Europe/Budapest"),
    entry("Central Europe Standard Time", "AL", "Europe/Tirane"),
    entry("Central Europe Standard Time", "CZ", "Europe/Prague"),
    entry("Central Europe Standard Time", "HU", "Europe/Budapest"),
    entry("Central Europe Standard Time", "ME", "Europe/Podgorica"),
    entry("Central Europe Standard Time", "RS", "Europe/Belgrade"),
    entry("Central Europe Standard Time", "SI", "Europe/Ljubljana"),
    entry("Central Europe Standard Time", "SK", "Europe/Bratislava"),
    // (UTC+01:00) Brussels, Copenhagen, Madrid, Paris
    entry("Romance Standard Time", "001", "Europe/Paris"),
    entry("Romance Standard Time", "BE", "Europe/Brussels"),
    entry("Romance Standard Time", "DK", "Europe/Copenhagen"),
    entry("Romance Standard Time", "ES", "Europe/Madrid Africa/Ceuta"),
    entry("Romance Standard Time", "FR", "Europe/Paris"),
    // (UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb
    entry("Central European Standard Time", "001", "Europe/Warsaw"),
    entry("Central European Standard Time", "BA", "Europe/Sarajevo"),
    entry("Central European Standard Time", "HR", "Europe/Zagreb"),
    entry("Central European Standard Time", "MK", "Europe/Skopje"),
    entry("Central European Standard Time", "PL", "Europe/Warsaw"),
    // (UTC+01:00) Tripoli
    entry("Libya Standard Time", "001", "Africa/Tripoli"),
    entry("Libya Standard Time", "LY", "Africa/Tripoli"),
    // (UTC+01:00) West Central Africa
    entry("W. Central Africa Standard Time", "001", "Africa/Lagos"),
    entry("W. Central Africa Standard Time", "AO", "Africa/Luanda"),
    entry("W. Central Africa Standard Time", "BJ", "Africa/Porto-Novo"),
    entry("W. Central Africa Standard Time", "CD", "Africa/Kinshasa"),
    entry("W. Central Africa Standard Time", "CF", "Africa/Bangui"),
    entry("W. Central Africa Standard Time", "CG", "Africa/Brazzaville"),
    entry("W. Central Africa Standard Time", "CM", "Africa/Douala"),
    entry("W. Central Africa Standard Time", "DZ", "Africa/Algiers"),
    entry("W. Central Africa Standard Time", "GA", "Africa/Libreville"),
    entry("W. Central Africa Standard Time", "GQ", "Africa/Malabo"),
    entry("W. Central Africa Standard Time", "NE", "Africa/Niamey"),
    entry("W. Central Africa Standard Time", "NG", "Africa/Lagos"),
    entry("W. Central Africa Standard Time", "TD", "Africa/Ndjamena"),
    entry("W. Central Africa Standard Time", "TN", "Africa/Tunis"),
    entry("W. Central Africa Standard Time", "ZZ", "Etc/GMT-1"),
    // (UTC+01:00) Windhoek
    entry("Namibia Standard Time", "001", "Africa/Windhoek"),
    entry("Namibia Standard Time", "NA", "Africa/Windhoek"),
    // (UTC+02:00) Athens, Bucharest
    entry("GTB Standard Time", "001", "Europe/Bucharest"),
    entry("GTB Standard Time", "GR", "Europe/Athens"),
    entry("GTB Standard Time", "MD", "Europe/Chisinau"),
    entry("GTB Standard Time", "RO", "Europe/Bucharest"),
    // (UTC+02:00) Beirut
    entry("Middle East Standard Time", "001", "Asia/Beirut"),
    entry("Middle East Standard Time", "LB", "Asia/Beirut"),
    // (UTC+02:00) Cairo
    entry("Egypt Standard Time", "001", "Africa/Cairo"),
    entry("Egypt Standard Time", "EG", "Africa/Cairo"),
    // (UTC+02:00) Damascus
    entry("Syria Standard Time", "001", "Asia/Damascus"),
    entry("Syria Standard Time", "SY", "Asia/Damascus"),
    // (UTC+02:00) E. Europe
    entry("E. Europe Standard Time", "001", "Asia/Nicosia"),
    entry("E. Europe Standard Time", "CY", "Asia/Nicosia"),
    // (UTC+02:00) Harare, Pretoria
    entry("South Africa Standard Time", "001", "Africa/Johannesburg"),
    entry("South Africa Standard Time", "BI", "Africa/Bujumbura"),
    entry("South Africa Standard Time", "BW", "Africa/Gaborone"),
    entry("South Africa Standard Time", "CD", "Africa/Lubumbashi"),
    entry("South Africa Standard Time", "LS", "Africa/Maseru"),
    entry("South Africa Standard Time", "MW", "Africa/Blantyre"),
    entry("South Africa Standard Time", "MZ", "Africa/Maputo"),
    entry("South Africa Standard Time", "RW", "Africa/Kigali"),
    entry("South Africa Standard Time", "SZ", "Africa/Mbabane"),
    entry("South Africa Standard Time", "ZA", "Africa/Johannesburg"),
    entry("South Africa Standard Time", "ZM", "Africa/Lusaka"),
    entry("South Africa Standard Time", "ZW", "Africa/Harare"),
    entry("South Africa Standard Time", "ZZ", "Etc/GMT-2"),
    // (UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius
    entry("FLE Standard Time", "001", "Europe/Kiev"),
    entry("FLE Standard Time", "AX", "Europe/Mariehamn"),
    entry("FLE Standard Time", "BG", "Europe/Sofia"),
    entry("FLE Standard Time", "EE", "Europe/Tallinn"),
    entry("FLE Standard Time", "FI", "Europe/Helsinki"),
    entry("FLE Standard Time", "LT", "Europe/Vilnius"),
    entry("FLE Standard Time", "LV", "Europe/Riga"),
    entry("FLE Standard Time", "UA", "Europe/Kiev Europe/Simferopol Europe/Uzhgorod Europe/Zaporozhye"),
    // (UTC+02:00) Istanbul
    entry("Turkey Standard Time", "001", "Europe/Istanbul"),
    entry("Turkey Standard Time", "TR", "Europe/Istanbul"),
    // (UTC+02:00) Jerusalem
    entry("Israel Standard Time", "001", "Asia/Jerusalem"),
    entry("Israel Standard Time", "IL", "Asia/Jerusalem"),
    // (UTC+03:00) Amman
    entry("Jordan Standard Time", "001", "Asia/Amman"),
    entry("Jordan Standard Time", "JO", "Asia/Amman"),
    // (UTC+03:00) Baghdad
    entry("Arabic Standard Time", "001", "Asia/Baghdad"),
    entry("Arabic Standard Time", "IQ", "Asia/Baghdad"),
    // (UTC+03:00) Kaliningrad, Minsk
    entry("Kaliningrad Standard Time", "001", "Europe/Kaliningrad"),
    entry("Kaliningrad Standard Time", "BY", "Europe/Minsk"),
    entry("Kaliningrad Standard Time", "RU", "Europe/Kaliningrad"),
    // (UTC+03:00) Kuwait, Riyadh
    entry("Arab Standard Time", "001", "Asia/Riyadh"),
    entry("Arab Standard Time", "BH", "Asia/Bahrain"),
    entry("Arab Standard Time", "KW", "Asia/Kuwait"),
    entry("Arab Standard Time", "QA", "Asia/Qatar"),
    entry("Arab Standard Time", "SA", "Asia/Riyadh"),
    entry("Arab Standard Time", "YE", "Asia/Aden"),
    // (UTC+03:00) Nairobi
    entry("E. Africa Standard Time", "001", "Africa/Nairobi"),
    entry("E. Africa Standard Time", "AQ", "Antarctica/Syowa"),
    entry("E. Africa Standard Time", "DJ", "Africa/Djibouti"),
    entry("E. Africa Standard Time", "ER", "Africa/Asmera"),
    entry("E. Africa Standard Time", "ET", "Africa/Addis_Ababa"),
    entry("E. Africa Standard Time", "KE", "Africa/Nairobi"),
    entry("E. Africa Standard Time", "KM", "Indian/Comoro"),
    entry("E. Africa Standard Time", "MG", "Indian/Antananarivo"),
    entry("E. Africa Standard Time", "SD", "Africa/Khartoum"),
    entry("E. Africa Standard Time", "SO", "Africa/Mogadishu"),
    entry("E. Africa Standard Time", "SS", "Africa/Juba"),
    entry("E. Africa Standard Time", "TZ", "Africa/Dar_es_Salaam"),
    entry("E. Africa Standard Time", "UG", "Africa/Kampala"),
    entry("E. Africa Standard Time", "YT", "Indian/Mayotte"),
    entry("E. Africa Standard Time", "ZZ", "Etc/GMT-3"),
    // (UTC+03:30) Tehran
    entry("Iran Standard Time", "001", "Asia/Tehran"),
    entry("Iran Standard Time", "IR", "Asia/Tehran"),
    // (UTC+04:00) Abu Dhabi, Muscat
    entry("Arabian Standard Time", "001", "Asia/Dubai"),
    entry("Arabian Standard Time", "AE", "Asia/Dubai"),
    entry("Arabian Standard Time", "OM", "Asia/Muscat"),
    entry("Arabian Standard Time", "ZZ", "Etc/GMT-4"),
    // (UTC+04:00) Baku
    entry("Azerbaijan Standard Time", "001", "Asia/Baku"),
    entry("Azerbaijan Standard Time", "AZ", "Asia/Baku"),
    // (UTC+04:00) Moscow, St. Petersburg, Volgograd
    entry("Russian Standard Time", "001", "Europe/Moscow"),
    entry("Russian Standard Time", "RU", "Europe/Moscow Europe/Samara Europe/Volgograd"),
    // (UTC+04:00) Port Louis
    entry("Mauritius Standard Time", "001", "Indian/Mauritius"),
    entry("Mauritius Standard Time", "MU", "Indian/Mauritius"),
    entry("Mauritius Standard Time", "RE", "Indian/Reunion"),
    entry("Mauritius Standard Time", "SC", "Indian/Mahe"),
    // (UTC+04:00) Tbilisi
    entry("Georgian Standard Time", "001", "Asia/Tbilisi"),
    entry("Georgian Standard Time", "GE", "Asia/Tbilisi"),
    // (UTC+04:00) Yerevan
    entry("Caucasus Standard Time", "001", "Asia/Yerevan"),
    entry("Caucasus Standard Time", "AM", "Asia/Yerevan"),
    // (UTC+04:30) Kabul
    entry("Afghanistan Standard Time", "001", "Asia/Kabul"),
    entry("Afghanistan Standard Time", "AF", "Asia/Kabul"),
    // (UTC+05:00) Islamabad, Karachi
    entry("Pakistan Standard Time", "001", "Asia/Karachi"),
    entry("Pakistan Standard Time", "PK", "Asia/Karachi"),
    // (UTC+05:00) Tashkent
    entry("West Asia Standard Time", "001", "Asia/Tashkent"),
    entry("West Asia Standard Time", "AQ", "Antarctica/Mawson"),
    entry("West Asia Standard Time", "KZ", "Asia/Oral Asia/Aqtau Asia/Aqtobe"),
    entry("West Asia Standard Time", "MV", "Indian/Maldives"),
    entry("West Asia Standard Time", "TF", "Indian/Kerguelen"),
    entry("West Asia Standard Time", "TJ", "Asia/Dushanbe"),
    entry("West Asia Standard Time", "TM", "Asia/Ashgabat"),
    entry("West Asia Standard Time", "UZ", "Asia/Tashkent Asia/Samarkand"),
    entry("West Asia Standard Time", "ZZ", "Etc/GMT-5"),
    // (UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi
    entry("India Standard Time", "001", "Asia/Calcutta"),
    entry("India Standard Time", "IN", "Asia/Calcutta"),
    // (UTC+05:30) Sri Jayawardenepura
    entry("Sri Lanka Standard Time", "001", "Asia/Colombo"),
    entry("Sri Lanka Standard Time", "LK", "Asia/Colombo"),
    // (UTC+05:45) Kathmandu
    entry("Nepal Standard Time", "001", "Asia/Katmandu"),
    entry("Nepal Standard Time", "NP", "Asia/Katmandu"),
    // (UTC+06:00) Astana
    entry("Central Asia Standard Time", "001", "Asia/Almaty"),
    entry("Central Asia Standard Time", "AQ", "Antarctica/Vostok"),
    entry("Central Asia Standard Time", "IO", "Indian/Chagos"),
    entry("Central Asia Standard Time", "KG", "Asia/Bishkek"),
    entry("Central Asia Standard Time", "KZ", "Asia/Almaty Asia/Qyzylorda"),
    entry("Central Asia Standard Time", "ZZ", "Etc/GMT-6"),
    // (UTC+06:00) Dhaka
    entry("Bangladesh Standard Time", "001", "Asia/Dhaka"),
    entry("Bangladesh Standard Time", "BD", "Asia/Dhaka"),
    entry("Bangladesh Standard Time", "BT", "Asia/Thimphu"),
    // (UTC+06:00) Ekaterinburg
    entry("Ekaterinburg Standard Time", "001", "Asia/Yekaterinburg"),
    entry("Ekaterinburg Standard Time", "RU", "Asia/Yekaterinburg"),
    // (UTC+06:30) Yangon (Rangoon)
    entry("Myanmar Standard Time", "001", "Asia/Rangoon"),
    entry("Myanmar Standard Time", "CC", "Indian/Cocos"),
    entry("Myanmar Standard Time", "MM", "Asia/Rangoon"),
    // (UTC+07:00) Bangkok, Hanoi, Jakarta
    entry("SE Asia Standard Time", "001", "Asia/Bangkok"),
    entry("SE Asia Standard Time", "AQ", "Antarctica/Davis"),
    entry("SE Asia Standard Time", "CX", "Indian/Christmas"),
    entry("SE Asia Standard Time", "ID", "Asia/Jakarta Asia/Pontianak"),
    entry("SE Asia Standard Time", "KH", "Asia/Phnom_Penh"),
    entry("SE Asia Standard Time", "LA", "Asia/Vientiane"),
    entry("SE Asia Standard Time", "MN", "Asia/Hovd"),
    entry("SE Asia Standard Time", "TH", "Asia/Bangkok"),
    entry("SE Asia Standard Time", "VN", "Asia/Saigon"),
    entry("SE Asia Standard Time", "ZZ", "Etc/GMT-7"),
    // (UTC+07:00) Novosibirsk
    entry("N. Central Asia Standard Time", "001", "Asia/Novosibirsk"),
    entry("N. Central Asia Standard Time", "RU", "Asia/Novosibirsk Asia/Novokuznetsk Asia/Omsk"),
    // (UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi
    entry("China Standard Time", "001", "Asia/Shanghai"),
    entry("China Standard Time", "CN", "Asia/Shanghai Asia/Chongqing Asia/Harbin Asia/Kashgar Asia/Urumqi"),
    entry("China Standard Time", "HK", "Asia/Hong_Kong"),
    entry("China Standard Time", "MO", "Asia/Macau"),
    // (UTC+08:00) Krasnoyarsk
    entry("North Asia Standard Time", "001", "Asia/Krasnoyarsk"),
    entry("North Asia Standard Time", "RU", "Asia/Krasnoyarsk"),
    // (UTC+08:00) Kuala Lumpur, Singapore
    entry("Singapore Standard Time", "001", "Asia/Singapore"),
    entry("Singapore Standard Time", "BN", "Asia/Brunei"),
    entry("Singapore Standard Time", "ID", "Asia/Makassar"),
    entry("Singapore Standard Time", "MY", "Asia/Kuala_Lumpur Asia/Kuching"),
    entry("Singapore Standard Time", "PH", "Asia/Manila"),
    entry("Singapore Standard Time", "SG", "Asia/Singapore"),
    entry("Singapore Standard Time", "ZZ", "Etc/GMT-8"),
    // (UTC+08:00) Perth
    entry("W. Australia Standard Time", "001", "Australia/Perth"),
    entry("W. Australia Standard Time", "AQ", "Antarctica/Casey"),
    entry("W. Australia Standard Time", "AU", "Australia/Perth"),
    // (UTC+08:00) Taipei
    entry("Taipei Standard Time", "001", "Asia/Taipei"),
    entry("Taipei Standard Time", "TW", "Asia/Taipei"),
    // (UTC+08:00) Ulaanbaatar
    entry("Ulaanbaatar Standard Time", "001", "Asia/Ulaanbaatar"),
    entry("Ulaanbaatar Standard Time", "MN", "Asia/Ulaanbaatar Asia/Choibalsan"),
    // (UTC+09:00) Irkutsk
    entry("North Asia East Standard Time", "001", "Asia/Irkutsk"),
    entry("North Asia East Standard Time", "RU", "Asia/Irkutsk"),
    // (UTC+09:00) Osaka, Sapporo, Tokyo
    entry("Tokyo Standard Time", "001", "Asia/Tokyo"),
    entry("Tokyo Standard Time", "ID", "Asia/Jayapura"),
    entry("Tokyo Standard Time", "JP", "Asia/Tokyo"),
    entry("Tokyo Standard Time", "PW", "Pacific/Palau"),
    entry("Tokyo Standard Time", "TL", "Asia/Dili"),
    entry("Tokyo Standard Time", "ZZ", "Etc/GMT-9"),
    // (UTC+09:00) Seoul
    entry("Korea Standard Time", "001", "Asia/Seoul"),
    entry("Korea Standard Time", "KP", "Asia/Pyongyang"),
    entry("Korea Standard Time", "KR", "Asia/Seoul"),
    // (UTC+09:30) Adelaide
    entry("Cen. Australia Standard Time", "001", "Australia/Adelaide"),
    entry("Cen. Australia Standard Time", "AU", "Australia/Adelaide Australia/Broken_Hill"),
    // (UTC+09:30) Darwin
    entry("AUS Central Standard Time", "001", "Australia/Darwin"),
    entry("AUS Central Standard Time", "AU", "Australia/Darwin"),
    // (UTC+10:00) Brisbane
    entry("E. Australia Standard Time", "001", "Australia/Brisbane"),
    entry("E. Australia Standard Time", "AU", "Australia/Brisbane Australia/Lindeman"),
    // (UTC+10:00) Canberra, Melbourne, Sydney
    entry("AUS Eastern Standard Time", "001", "Australia/Sydney"),
    entry("AUS Eastern Standard Time", "AU", "Australia/Sydney Australia/Melbourne"),
    // (UTC+10:00) Guam, Port Moresby
    entry("West Pacific Standard Time", "001", "Pacific/Port_Moresby"),
    entry("West Pacific Standard Time", "AQ", "Antarctica/DumontDUrville"),
    entry("West Pacific Standard Time", "FM", "Pacific/Truk"),
    entry("West Pacific Standard Time", "GU", "Pacific/Guam"),
    entry("West Pacific Standard Time", "MP", "Pacific/Saipan"),
    entry("West Pacific Standard Time", "PG", "Pacific/Port_Moresby"),
    entry("West Pacific Standard Time", "ZZ", "Etc/GMT-10"),
    // (UTC+10:00) Hobart
    entry("Tasmania Standard Time", "001", "Australia/Hobart"),
    entry("Tasmania Standard Time", "AU", "Australia/Hobart Australia/Currie"),
    // (UTC+10:00) Yakutsk
    entry("Yakutsk Standard Time", "001", "Asia/Yakutsk"),
    entry("Yakutsk Standard Time", "RU", "Asia/Yakutsk Asia/Khandyga"),
    // (UTC+11:00) Solomon Is., New Caledonia
    entry("Central Pacific Standard Time", "001", "Pacific/Guadalcanal"),
    entry("Central Pacific Standard Time", "AU", "Antarctica/Macquarie"),
    entry("Central Pacific Standard Time", "FM", "Pacific/Ponape Pacific/Kosrae"),
    entry("Central Pacific Standard Time", "NC", "Pacific/Noumea"),
    entry("Central Pacific Standard Time", "SB", "Pacific/Guadalcanal"),
    entry("Central Pacific Standard Time", "VU", "Pacific/Efate"),
    entry("Central Pacific Standard Time", "ZZ", "Etc/GMT-11"),
    // (UTC+11:00) Vladivostok
    entry("Vladivostok Standard Time", "001", "Asia/Vladivostok"),
    entry("Vladivostok Standard Time", "RU", "Asia/Vladivostok Asia/Sakhalin Asia/Ust-Nera"),
    // (UTC+12:00) Auckland, Wellington
    entry("New Zealand Standard Time", "001", "Pacific/Auckland"),
    entry("New Zealand Standard Time", "AQ", "Antarctica/South_Pole Antarctica/McMurdo"),
    entry("New Zealand Standard Time", "NZ", "Pacific/Auckland"),
    // (UTC+12:00) Coordinated Universal Time+12
    entry("UTC+12", "001", "Etc/GMT-12"),
    entry("UTC+12", "KI", "Pacific/Tarawa"),
    entry("UTC+12", "MH", "Pacific/Majuro Pacific/Kwajalein"),
    entry("UTC+12", "NR", "Pacific/Nauru"),
    entry("UTC+12", "TV", "Pacific/Funafuti"),
    entry("UTC+12", "UM", "Pacific/Wake"),
    entry("UTC+12", "WF", "Pacific/Wallis"),
    entry("UTC+12", "ZZ", "Etc/GMT-12"),
    // (UTC+12:00) Fiji
    entry("Fiji Standard Time", "001", "Pacific/Fiji"),
    entry("Fiji Standard Time", "FJ", "Pacific/Fiji"),
    // (UTC+12:00) Magadan
    entry("Magadan Standard Time", "001", "Asia/Magadan"),
    entry("Magadan Standard Time", "RU", "Asia/Magadan Asia/Anadyr Asia/Kamchatka"),
    // (UTC+13:00) Nuku'alofa
    entry("Tonga Standard Time", "001", "Pacific/Tongatapu"),
    entry("Tonga Standard Time", "KI", "Pacific/Enderbury"),
    entry("Tonga Standard Time", "TK", "Pacific/Fakaofo"),
    entry("Tonga Standard Time", "TO", "Pacific/Tongatapu"),
    entry("Tonga Standard Time", "ZZ", "Etc/GMT-13"),
    // (UTC+13:00) Samoa
    entry("Samoa Standard Time", "001", "Pacific/Apia"),
    entry("Samoa Standard Time", "WS", "Pacific/Apia"),
];

const fn entry(
    windows_id: &'static str,
    territory: &'static str,
    standard_ids: &'static str,
) -> WindowsZoneEntry {
    WindowsZoneEntry {
        windows_id,
        territory,
        standard_ids,
    }
}
